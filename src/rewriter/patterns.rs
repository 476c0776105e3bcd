use once_cell::sync::Lazy;
use regex::Regex;

const ARGUMENT_MARKERS: [&str; 3] = ["argc", "argv", "args"];

const INCLUDE_MARKER: &str = "#include";
const STD_HEADER: &str = "ext/stdcstar.h";

const NESTED_FUNC_MARKER: &str = "mainfunc";
const QUALIFIED_ENTRY_MARKER: &str = "usingfunc::integerfunc";

const PRINTLN_CALL: &str = "System.out.println";
const PRINTLN_CALL_CPP: &str = "System::out.println";

const ARGS_ARRAY_CPP: &str = "std::string args[] = {";

static ARGS_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"string\s+args\s*\[\s*\d+\s*\]\s*=\s*\{").unwrap());

static IMPORT_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s*\(\s*"([^"]+)"\s*,\s*"([^"]+)"\s*\)"#).unwrap());

/// True if the line mentions `argc`, `argv` or `args` anywhere.
pub fn mentions_arguments(line: &str) -> bool {
    ARGUMENT_MARKERS.iter().any(|m| line.contains(m))
}

/// `#include` of the standard CStar header, which the emitter already writes.
pub fn is_duplicate_include(line: &str) -> bool {
    line.contains(INCLUDE_MARKER) && line.contains(STD_HEADER)
}

/// The user's own `usingfunc::integerfunc mainfunc(...)` line; the emitter
/// writes its own signature.
pub fn is_nested_entry(line: &str) -> bool {
    line.contains(NESTED_FUNC_MARKER) && line.contains(QUALIFIED_ENTRY_MARKER)
}

/// `System.out.println` -> `System::out.println`, every occurrence.
pub fn rewrite_println(line: &str) -> String {
    line.replace(PRINTLN_CALL, PRINTLN_CALL_CPP)
}

/// `string args[N] = {` -> `std::string args[] = {`. The size is dropped.
pub fn rewrite_args_array(line: &str) -> String {
    ARGS_ARRAY.replace_all(line, ARGS_ARRAY_CPP).into_owned()
}

/// How an `import(...)` line asked for its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Import {
    System(String),
    Local(String),
    Unknown { header: String, kind: String },
}

impl Import {
    /// The `#include` directive for this import, if the kind is known.
    pub fn directive(&self) -> Option<String> {
        match self {
            Import::System(h) => Some(format!("#include <{}>", h)),
            Import::Local(h) => Some(format!("#include \"{}\"", h)),
            Import::Unknown { .. } => None,
        }
    }
}

/// Parse `import("header", "system"|"local")` anywhere in the line.
pub fn parse_import(line: &str) -> Option<Import> {
    let caps = IMPORT_CALL.captures(line)?;
    let header = caps[1].to_string();
    let kind = &caps[2];
    Some(match kind {
        "system" => Import::System(header),
        "local" => Import::Local(header),
        _ => Import::Unknown {
            header,
            kind: kind.to_string(),
        },
    })
}
