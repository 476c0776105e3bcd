//! Trigger boundary around the rewrite + emit pass.
//!
//! A pass runs at most once per session and only on a rising trigger edge.
//! The binary fires a single trigger synchronously.

use crate::config::Config;
use crate::emitter::{emit, EmittedProgram};
use crate::error::{Error, Result};
use crate::paths::output_path;
use crate::rewriter::{rewrite_with, RewriteResult};
use crate::source::{Encoding, SourceText};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Edge-triggered one-shot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassLatch {
    last_level: bool,
    fired: bool,
}

impl PassLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current trigger level. Returns true exactly once: on the
    /// first false -> true transition.
    pub fn poll(&mut self, level: bool) -> bool {
        let rising = level && !self.last_level;
        self.last_level = level;
        if rising && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// What one pass produced.
#[derive(Debug, Clone)]
pub struct PassOutcome {
    pub output: PathBuf,
    pub result: RewriteResult,
    pub program: EmittedProgram,
}

/// Read `input`, rewrite it, emit the program and write it beside the input.
pub fn transpile_file(input: &Path, config: &Config) -> Result<PassOutcome> {
    let source = read_source(input)?;
    let lines: Vec<&str> = source.text.lines().collect();

    let result = rewrite_with(&lines, &config.keywords, config.rewrite_options());
    let program = emit(&result, &config.header);

    let output = output_path(input);
    program
        .write_to(&output, source.encoding)
        .map_err(|source| Error::Output {
            path: output.clone(),
            source,
        })?;
    log::info!(
        "{} -> {} ({} of {} lines kept)",
        input.display(),
        output.display(),
        result.lines.len(),
        lines.len()
    );

    Ok(PassOutcome {
        output,
        result,
        program,
    })
}

fn read_source(input: &Path) -> Result<SourceText> {
    let bytes = fs::read(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound {
            path: input.to_path_buf(),
        },
        _ => Error::Input {
            path: input.to_path_buf(),
            source: e,
        },
    })?;
    let source = SourceText::decode(bytes);
    if source.encoding == Encoding::Latin1 {
        log::debug!("{} is not UTF-8, reading it byte for byte", input.display());
    }
    Ok(source)
}

/// One input file, one latch.
pub struct Session<'a> {
    input: PathBuf,
    config: &'a Config,
    latch: PassLatch,
}

impl<'a> Session<'a> {
    /// Fails up front if the input does not exist.
    pub fn open(input: impl Into<PathBuf>, config: &'a Config) -> Result<Self> {
        let input = input.into();
        if !input.is_file() {
            return Err(Error::InputNotFound { path: input });
        }
        Ok(Self {
            input,
            config,
            latch: PassLatch::new(),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Run the pass if `level` is a fresh rising edge and no pass ran yet.
    pub fn trigger(&mut self, level: bool) -> Result<Option<PassOutcome>> {
        if !self.latch.poll(level) {
            return Ok(None);
        }
        transpile_file(&self.input, self.config).map(Some)
    }

    /// Close the session. When the trigger never fired the output still
    /// gets written, holding only the header and its blank line.
    pub fn finish(self) -> Result<PathBuf> {
        let output = output_path(&self.input);
        if !self.latch.has_fired() {
            let text = format!("{}\n", self.config.header);
            fs::write(&output, text).map_err(|source| Error::Output {
                path: output.clone(),
                source,
            })?;
            log::debug!("no trigger fired; wrote header only to {}", output.display());
        }
        Ok(output)
    }
}
