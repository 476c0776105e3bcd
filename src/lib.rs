//! CStar to C++ line rewriter.
//!
//! `rewriter` turns CStar lines into C++ body lines, `emitter` wraps them in
//! the `mainfunc`/`main` template, and `toolchain` hands the result to an
//! external C++ compiler.

pub mod config;
pub mod emitter;
pub mod error;
pub mod paths;
pub mod rewriter;
pub mod session;
pub mod source;
pub mod toolchain;

pub use error::{Error, Result};

/// Version of the CStar language this compiler accepts.
pub const LANGUAGE_VERSION: &str = "CStar26";
