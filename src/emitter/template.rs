/// Fixed file header: provenance comment plus the CStar runtime include.
pub const DEFAULT_HEADER: &str = "// Transpiled from CStar\n#include \"ext/stdcstar.h\"\n";

pub const INDENT: &str = "    ";

/// Signature of the wrapped function, chosen by argument usage.
pub fn mainfunc_signature(uses_arguments: bool) -> &'static str {
    if uses_arguments {
        "usingfunc::integerfunc mainfunc(int argc, char* argv[]) {"
    } else {
        "usingfunc::integerfunc mainfunc() {"
    }
}

/// Top-level `main` that forwards to `mainfunc` with the same parameters.
pub fn forwarding_main(uses_arguments: bool) -> &'static str {
    if uses_arguments {
        "int main(int argc, char* argv[]) {\n    return mainfunc(argc, argv);\n}\n"
    } else {
        "int main() {\n    return mainfunc();\n}\n"
    }
}
