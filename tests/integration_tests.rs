use cstar_compiler::emitter::{emit, DEFAULT_HEADER};
use cstar_compiler::rewriter::{rewrite, rewrite_with, KeywordSet, RewriteOptions};

// Helper to split a fixture into source lines
fn lines_of(content: &str) -> Vec<&str> {
    content.lines().collect()
}

#[cfg(test)]
mod rewriter_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document() {
        let result = rewrite(&[], &KeywordSet::default());

        assert!(result.lines.is_empty(), "Empty input yields no body lines");
        assert!(!result.uses_arguments);
        assert!(result.keyword_hits.is_empty());
    }

    #[test]
    fn test_argument_usage_is_sticky() {
        let content = r#"int x = 0;
if (argv_like) {}
int y = 1;
"#;
        let result = rewrite(&lines_of(content), &KeywordSet::empty());
        assert!(result.uses_arguments, "argv inside a longer word still counts");

        let result = rewrite(&["int margc = 2;", "x = 1;"], &KeywordSet::empty());
        assert!(result.uses_arguments, "argc detected as a plain substring");

        let result = rewrite(&["print(x);", "return 0;"], &KeywordSet::empty());
        assert!(!result.uses_arguments);
    }

    #[test]
    fn test_arguments_seen_on_dropped_lines() {
        let content = r#"usingfunc::integerfunc mainfunc(int argc, char* argv[]) {
    return 0;
"#;
        let result = rewrite(&lines_of(content), &KeywordSet::empty());

        assert!(result.uses_arguments);
        assert_eq!(result.lines, vec!["    return 0;"]);
    }

    #[test]
    fn test_duplicate_include_dropped() {
        let content = r#"#include "ext/stdcstar.h"
#include "ext/other.h"
#include <vector>
"#;
        let result = rewrite(&lines_of(content), &KeywordSet::empty());

        assert_eq!(result.lines, vec![r#"#include "ext/other.h""#, "#include <vector>"]);
    }

    #[test]
    fn test_header_path_without_include_is_kept() {
        let result = rewrite(&[r#"// see ext/stdcstar.h"#], &KeywordSet::empty());
        assert_eq!(result.lines, vec!["// see ext/stdcstar.h"]);
    }

    #[test]
    fn test_nested_entry_dropped() {
        let content = r#"usingfunc::integerfunc mainfunc() {
usingfunc::integerfunc helper() {
mainfunc();
"#;
        let result = rewrite(&lines_of(content), &KeywordSet::empty());

        assert_eq!(
            result.lines,
            vec!["usingfunc::integerfunc helper() {", "mainfunc();"]
        );
    }

    #[test]
    fn test_println_rewrite() {
        let result = rewrite(
            &[
                r#"System.out.println("x");"#,
                r#"a.System.out.println("y"); System.out.println("z");"#,
                r#"System.out.print("w");"#,
            ],
            &KeywordSet::empty(),
        );

        assert_eq!(
            result.lines,
            vec![
                r#"System::out.println("x");"#,
                r#"a.System::out.println("y"); System::out.println("z");"#,
                r#"System.out.print("w");"#,
            ]
        );
    }

    #[test]
    fn test_args_array_rewrite_discards_size() {
        let result = rewrite(
            &[
                r#"string args [ 5 ] = {"a","b"}"#,
                r#"    string args[100]={"c"};"#,
            ],
            &KeywordSet::empty(),
        );

        assert_eq!(
            result.lines,
            vec![
                r#"std::string args[] = {"a","b"}"#,
                r#"    std::string args[] = {"c"};"#,
            ]
        );
        assert!(result.uses_arguments);
    }

    #[test]
    fn test_keyword_order_is_list_order() {
        let keywords = KeywordSet::new(["println", "integer"]);
        let content = r#"integer n = 1; System.out.println(n);
integer m = 2;
nothing here
"#;
        let result = rewrite(&lines_of(content), &keywords);

        assert_eq!(result.keyword_hits.len(), 2, "One hit per matching line");
        assert_eq!(result.keyword_hits[0].keyword, "println");
        assert_eq!(result.keyword_hits[0].line_number, 1);
        assert_eq!(result.keyword_hits[1].keyword, "integer");
        assert_eq!(result.keyword_hits[1].line_number, 2);
    }

    #[test]
    fn test_keywords_reported_on_dropped_lines() {
        let keywords = KeywordSet::new(["mainfunc"]);
        let result = rewrite(&["usingfunc::integerfunc mainfunc() {"], &keywords);

        assert!(result.lines.is_empty());
        assert_eq!(result.keyword_hits.len(), 1);
        assert_eq!(result.keyword_hits[0].line, "usingfunc::integerfunc mainfunc() {");
    }

    #[test]
    fn test_import_lines_pass_through_by_default() {
        let line = r#"import("cmath", "system");"#;
        let result = rewrite(&[line], &KeywordSet::empty());

        assert_eq!(result.lines, vec![line]);
        assert!(result.includes.is_empty());
    }

    #[test]
    fn test_import_hoisting() {
        let content = r#"import("cmath", "system");
import("util.h", "local");
import("x", "bogus");
System.out.println("hi");
"#;
        let options = RewriteOptions { hoist_imports: true };
        let result = rewrite_with(&lines_of(content), &KeywordSet::empty(), options);

        assert_eq!(result.includes, vec!["#include <cmath>", r#"#include "util.h""#]);
        assert_eq!(result.lines, vec![r#"System::out.println("hi");"#]);
    }
}

#[cfg(test)]
mod emitter_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_program() {
        let result = rewrite(&[], &KeywordSet::default());
        let program = emit(&result, DEFAULT_HEADER);

        let expected = r#"// Transpiled from CStar
#include "ext/stdcstar.h"

usingfunc::integerfunc mainfunc() {
}

int main() {
    return mainfunc();
}
"#;
        assert_eq!(program.as_str(), expected);
    }

    #[test]
    fn test_program_with_arguments() {
        let content = r#"#include "ext/stdcstar.h"
usingfunc::integerfunc mainfunc(int argc, char* argv[]) {
System.out.println(argv[0]);
"#;
        let result = rewrite(&lines_of(content), &KeywordSet::default());
        let program = emit(&result, DEFAULT_HEADER);

        let expected = r#"// Transpiled from CStar
#include "ext/stdcstar.h"

usingfunc::integerfunc mainfunc(int argc, char* argv[]) {
    System::out.println(argv[0]);
}

int main(int argc, char* argv[]) {
    return mainfunc(argc, argv);
}
"#;
        assert_eq!(program.as_str(), expected);
    }

    #[test]
    fn test_hoisted_includes_follow_header() {
        let options = RewriteOptions { hoist_imports: true };
        let result = rewrite_with(
            &[r#"import("vector", "system")"#, "return 0;"],
            &KeywordSet::empty(),
            options,
        );
        let program = emit(&result, "// h\n");

        let expected = r#"// h
#include <vector>

usingfunc::integerfunc mainfunc() {
    return 0;
}

int main() {
    return mainfunc();
}
"#;
        assert_eq!(program.as_str(), expected);
    }

    #[test]
    fn test_emit_is_repeatable() {
        let result = rewrite(&["int a = 1;", "return a;"], &KeywordSet::default());

        let first = emit(&result, DEFAULT_HEADER);
        let second = emit(&result, DEFAULT_HEADER);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.into_string());
    }

    #[test]
    fn test_braces_balanced_by_template() {
        let result = rewrite(&["if (x) {", "}"], &KeywordSet::empty());
        let text = emit(&result, DEFAULT_HEADER).into_string();

        let opens = text.matches('{').count();
        let closes = text.matches('}').count();
        assert_eq!(opens, closes);
    }
}
