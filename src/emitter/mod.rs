mod program;
mod template;

pub use program::{emit, EmittedProgram};
pub use template::DEFAULT_HEADER;
