//! Compiler configuration.
//!
//! Layers, lowest first: built-in defaults, an optional JSON file, the `CXX`
//! environment variable, then command-line flags (applied by the binary).

use crate::emitter::DEFAULT_HEADER;
use crate::error::{Error, Result};
use crate::rewriter::{KeywordSet, RewriteOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXECUTABLE_EXTENSION: &str = "out";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Keywords reported by the scan, in priority order.
    pub keywords: KeywordSet,
    /// Written verbatim at the top of every emitted file.
    pub header: String,
    pub hoist_imports: bool,
    /// `None` builds an extension-less executable.
    pub executable_extension: Option<String>,
    pub compiler: CompilerSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: KeywordSet::default(),
            header: DEFAULT_HEADER.to_string(),
            hoist_imports: false,
            executable_extension: Some(DEFAULT_EXECUTABLE_EXTENSION.to_string()),
            compiler: CompilerSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerSettings {
    /// Program plus leading words, shell-split (`"ccache g++"` works).
    pub command: String,
    pub include_dirs: Vec<PathBuf>,
    pub flags: Vec<String>,
    pub libs: Vec<String>,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            command: "g++".to_string(),
            include_dirs: Vec::new(),
            flags: vec!["-w".to_string(), "-std=gnu++23".to_string()],
            libs: vec!["-lm".to_string()],
        }
    }
}

impl Config {
    /// Defaults overlaid with a JSON file. Missing keys keep their default.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// `CXX` replaces the compiler command when set and non-blank.
    pub fn apply_env(&mut self, cxx: Option<String>) {
        if let Some(cxx) = cxx.filter(|c| !c.trim().is_empty()) {
            log::debug!("using CXX={:?}", cxx);
            self.compiler.command = cxx;
        }
    }

    pub fn rewrite_options(&self) -> RewriteOptions {
        RewriteOptions {
            hoist_imports: self.hoist_imports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cxx_is_ignored() {
        let mut config = Config::default();
        config.apply_env(Some("  ".into()));
        assert_eq!(config.compiler.command, "g++");
        config.apply_env(Some("clang++".into()));
        assert_eq!(config.compiler.command, "clang++");
    }

    #[test]
    fn null_extension_means_none() {
        let config = Config::from_json(r#"{"executable_extension": null}"#).unwrap();
        assert_eq!(config.executable_extension, None);
    }
}
