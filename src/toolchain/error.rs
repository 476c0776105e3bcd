use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("C++ compiler not found: {program}")]
    Missing { program: String },

    #[error("{program} failed ({status}):\n{diagnostics}")]
    Failed {
        program: String,
        status: ExitStatus,
        /// Compiler stderr, or stdout when stderr is blank.
        diagnostics: String,
    },

    #[error("cannot parse compiler command: {command:?}")]
    BadCommand { command: String },

    #[error("could not run {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}
