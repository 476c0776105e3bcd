mod error;
mod gxx;

pub use error::ToolError;
pub use gxx::Gxx;

use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, ExitStatus};

/// External C++ toolchain: turns the emitted `.cpp` into an executable.
pub trait Compiler {
    fn compile(&self, source: &Path, output: &Path) -> Result<PathBuf, ToolError>;
}

/// Run a freshly built executable with the terminal attached.
pub fn run_executable(path: &Path) -> Result<ExitStatus, ToolError> {
    let program = runnable_path(path);
    let display = program.display().to_string();
    log::info!("running {}", display);

    Command::new(&program).status().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ToolError::Missing { program: display },
        _ => ToolError::Io {
            program: display,
            source: e,
        },
    })
}

/// A bare file name would be looked up on `PATH`; anchor it to the cwd.
fn runnable_path(path: &Path) -> PathBuf {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Path::new(".").join(path),
        _ => path.to_path_buf(),
    }
}
