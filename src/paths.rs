use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "testfile.cstar";
pub const SOURCE_EXTENSION: &str = ".cstar";
pub const OUTPUT_EXTENSION: &str = "cpp";

/// First argument naming a `.cstar` file, else `testfile.cstar`.
pub fn select_input<S: AsRef<str>>(args: &[S]) -> PathBuf {
    args.iter()
        .map(AsRef::as_ref)
        .find(|a| a.ends_with(SOURCE_EXTENSION))
        .map_or_else(|| PathBuf::from(DEFAULT_INPUT), PathBuf::from)
}

/// `dir/prog.cstar` -> `dir/prog.cpp`
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// `dir/prog.cstar` -> `dir/prog.out`, or `dir/prog` without an extension.
pub fn executable_path(input: &Path, extension: Option<&str>) -> PathBuf {
    input.with_extension(extension.unwrap_or(""))
}
