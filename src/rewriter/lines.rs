use super::keywords::KeywordSet;
use super::patterns::{
    is_duplicate_include, is_nested_entry, mentions_arguments, parse_import, rewrite_args_array,
    rewrite_println,
};
use super::types::{KeywordHit, RewriteOptions, RewriteResult};

/// Rewrite a CStar document line by line with the default options.
pub fn rewrite(lines: &[&str], keywords: &KeywordSet) -> RewriteResult {
    rewrite_with(lines, keywords, RewriteOptions::default())
}

/// Full rewrite pass.
///
/// Keyword scan and argument detection look at every line, dropped or not.
/// Substitutions are line-local, so each input line yields at most one
/// output line and order is kept.
pub fn rewrite_with(
    lines: &[&str],
    keywords: &KeywordSet,
    options: RewriteOptions,
) -> RewriteResult {
    let mut result = RewriteResult {
        lines: Vec::with_capacity(lines.len()),
        ..RewriteResult::default()
    };

    for (i, &line) in lines.iter().enumerate() {
        if let Some(keyword) = keywords.first_in(line) {
            result.keyword_hits.push(KeywordHit {
                keyword: keyword.to_string(),
                line_number: i + 1,
                line: line.to_string(),
            });
        }

        if mentions_arguments(line) {
            result.uses_arguments = true;
        }

        if options.hoist_imports {
            if let Some(import) = parse_import(line) {
                match import.directive() {
                    Some(directive) => {
                        log::debug!("line {}: hoisting {}", i + 1, directive);
                        result.includes.push(directive);
                    }
                    None => {
                        log::warn!(
                            "line {}: unknown import kind in {:?}, use \"system\" or \"local\"",
                            i + 1,
                            line.trim()
                        );
                    }
                }
                continue;
            }
        }

        if is_duplicate_include(line) {
            log::debug!("line {}: dropping duplicate standard include", i + 1);
            continue;
        }

        if is_nested_entry(line) {
            log::debug!("line {}: dropping nested entry point", i + 1);
            continue;
        }

        let rewritten = rewrite_args_array(&rewrite_println(line));
        if rewritten != line {
            log::debug!("line {}: {:?} -> {:?}", i + 1, line, rewritten);
        }
        result.lines.push(rewritten);
    }

    result
}
