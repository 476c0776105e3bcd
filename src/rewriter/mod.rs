mod keywords;
mod lines;
mod patterns;
mod types;

pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use lines::{rewrite, rewrite_with};
pub use patterns::{
    is_duplicate_include, is_nested_entry, mentions_arguments, parse_import, rewrite_args_array,
    rewrite_println, Import,
};
pub use types::{KeywordHit, RewriteOptions, RewriteResult};
