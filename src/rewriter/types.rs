/// One keyword report: the first configured keyword found on a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit {
    pub keyword: String,
    /// 1-based line number in the source document.
    pub line_number: usize,
    pub line: String,
}

/// Knobs for a rewrite pass. The default is the plain line rewriter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Lift `import("name", "system"|"local")` lines into `#include`s.
    pub hoist_imports: bool,
}

/// Output of a rewrite pass: transformed body lines plus what the emitter
/// needs to pick the entry-point template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteResult {
    pub lines: Vec<String>,
    pub uses_arguments: bool,
    pub keyword_hits: Vec<KeywordHit>,
    /// Hoisted include directives, in source order. Empty unless imports are hoisted.
    pub includes: Vec<String>,
}
