use super::{Compiler, ToolError};
use crate::config::CompilerSettings;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// GCC-compatible driver (`g++`, `clang++`, or whatever `CXX` names).
#[derive(Debug, Clone)]
pub struct Gxx {
    program: String,
    /// Words after the program in a multi-word command such as `ccache g++`.
    leading_args: Vec<String>,
    include_dirs: Vec<PathBuf>,
    flags: Vec<String>,
    libs: Vec<String>,
}

impl Gxx {
    pub fn from_settings(settings: &CompilerSettings) -> Result<Self, ToolError> {
        let words = shlex::split(&settings.command).ok_or_else(|| ToolError::BadCommand {
            command: settings.command.clone(),
        })?;
        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| ToolError::BadCommand {
            command: settings.command.clone(),
        })?;

        Ok(Self {
            program,
            leading_args: words.collect(),
            include_dirs: settings.include_dirs.clone(),
            flags: settings.flags.clone(),
            libs: settings.libs.clone(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed after the program name.
    pub fn args(&self, source: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.leading_args.iter().map(OsString::from).collect();
        for dir in &self.include_dirs {
            let mut flag = OsString::from("-I");
            flag.push(dir);
            args.push(flag);
        }
        args.extend(self.flags.iter().map(OsString::from));
        args.push(source.as_os_str().to_owned());
        args.extend(self.libs.iter().map(OsString::from));
        args.push(OsString::from("-o"));
        args.push(output.as_os_str().to_owned());
        args
    }

    /// Shell-quoted command line, for logs.
    pub fn display_command(&self, source: &Path, output: &Path) -> String {
        let mut words = vec![self.program.clone()];
        words.extend(
            self.args(source, output)
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        );
        shlex::try_join(words.iter().map(String::as_str)).unwrap_or_else(|_| words.join(" "))
    }
}

impl Compiler for Gxx {
    fn compile(&self, source: &Path, output: &Path) -> Result<PathBuf, ToolError> {
        log::info!("running {}", self.display_command(source, output));

        let result = Command::new(&self.program)
            .args(self.args(source, output))
            .stdin(Stdio::null())
            .output();

        let out = match result {
            Ok(out) => out,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ToolError::Missing {
                    program: self.program.clone(),
                })
            }
            Err(source) => {
                return Err(ToolError::Io {
                    program: self.program.clone(),
                    source,
                })
            }
        };

        let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
        if !stdout.trim().is_empty() {
            log::info!("{} stdout:\n{}", self.program, stdout.trim_end());
        }
        if !out.status.success() {
            // Some drivers print errors on stdout only.
            let diagnostics = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(ToolError::Failed {
                program: self.program.clone(),
                status: out.status,
                diagnostics,
            });
        }
        if !stderr.trim().is_empty() {
            log::warn!("{} reported:\n{}", self.program, stderr.trim_end());
        }

        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(command: &str) -> CompilerSettings {
        CompilerSettings {
            command: command.to_string(),
            include_dirs: vec![PathBuf::from("inc")],
            flags: vec!["-w".into()],
            libs: vec!["-lm".into()],
        }
    }

    #[test]
    fn multi_word_command_is_split() {
        let gxx = Gxx::from_settings(&settings("ccache 'g++'")).unwrap();
        assert_eq!(gxx.program(), "ccache");
        let args = gxx.args(Path::new("a.cpp"), Path::new("a.out"));
        let args: Vec<_> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["g++", "-Iinc", "-w", "a.cpp", "-lm", "-o", "a.out"]);
    }

    #[test]
    fn blank_command_is_rejected() {
        assert!(matches!(
            Gxx::from_settings(&settings("   ")),
            Err(ToolError::BadCommand { .. })
        ));
        assert!(matches!(
            Gxx::from_settings(&settings("\"g++")),
            Err(ToolError::BadCommand { .. })
        ));
    }

    #[test]
    fn display_quotes_spaces() {
        let gxx = Gxx::from_settings(&settings("g++")).unwrap();
        let line = gxx.display_command(Path::new("my dir/a.cpp"), Path::new("a.out"));
        let words = shlex::split(&line).unwrap();
        assert_eq!(words[3], "my dir/a.cpp");
    }
}
