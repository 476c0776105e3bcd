use super::template::{forwarding_main, mainfunc_signature, INDENT};
use crate::rewriter::RewriteResult;
use crate::source::Encoding;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// A complete C++ translation unit ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedProgram {
    text: String,
    header_len: usize,
}

impl EmittedProgram {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// File contents. The header is always UTF-8; the body goes back
    /// through the encoding the source was read with.
    pub fn to_bytes(&self, encoding: Encoding) -> Vec<u8> {
        let (header, rest) = self.text.split_at(self.header_len);
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend(encoding.encode(rest));
        bytes
    }

    pub fn write_to(&self, path: &Path, encoding: Encoding) -> io::Result<()> {
        fs::write(path, self.to_bytes(encoding))
    }
}

impl fmt::Display for EmittedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Wrap rewritten lines in the `mainfunc` / `main` template.
///
/// `header` is written verbatim; hoisted includes follow it, then a blank line.
pub fn emit(result: &RewriteResult, header: &str) -> EmittedProgram {
    let body_len: usize = result.lines.iter().map(|l| l.len() + INDENT.len() + 1).sum();
    let mut text = String::with_capacity(header.len() + body_len + 128);

    text.push_str(header);
    for include in &result.includes {
        text.push_str(include);
        text.push('\n');
    }
    text.push('\n');

    text.push_str(mainfunc_signature(result.uses_arguments));
    text.push('\n');
    for line in &result.lines {
        text.push_str(INDENT);
        text.push_str(line);
        text.push('\n');
    }
    text.push_str("}\n\n");

    text.push_str(forwarding_main(result.uses_arguments));

    EmittedProgram {
        text,
        header_len: header.len(),
    }
}
