//! Byte-exact text bridge for source files.
//!
//! Valid UTF-8 is used as is. Anything else is decoded one byte per char
//! (Latin-1), so every source byte maps to a char <= U+00FF and encodes
//! back to the same byte. Rewrites only touch ASCII, which keeps the round
//! trip exact.

/// How the source bytes were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
}

/// Source file contents as text plus the encoding needed to write them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    pub encoding: Encoding,
}

impl SourceText {
    pub fn decode(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self {
                text,
                encoding: Encoding::Utf8,
            },
            Err(e) => {
                let bytes = e.into_bytes();
                Self {
                    text: bytes.iter().map(|&b| char::from(b)).collect(),
                    encoding: Encoding::Latin1,
                }
            }
        }
    }
}

impl Encoding {
    /// Inverse of [`SourceText::decode`] for text derived from the source.
    /// Chars above U+00FF (never produced by decoding) are written as UTF-8.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Latin1 => {
                let mut out = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    match u8::try_from(u32::from(ch)) {
                        Ok(b) => out.push(b),
                        Err(_) => {
                            let mut buf = [0u8; 4];
                            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                        }
                    }
                }
                out
            }
        }
    }
}
