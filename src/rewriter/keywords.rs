use serde::{Deserialize, Serialize};

/// CStar words reported by the keyword scan, in scan order.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "usingfunc",
    "integerfunc",
    "mainfunc",
    "returnf",
    "System.out.println",
    "cstar25::pinput",
    "cpp20::println",
    "delay.ms",
    "getArgs",
    "import",
    "integer",
    "str",
    "rtrn",
];

/// Ordered keyword list. Only answers "which configured keyword shows up
/// first in this line"; order is the configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// First keyword, in list order, contained anywhere in `line`.
    pub fn first_in(&self, line: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|kw| line.contains(kw.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
