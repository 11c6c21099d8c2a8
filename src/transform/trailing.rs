use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::path::Path;

use super::{rewrite_in_place, FileTransform};
use crate::error::WhitespaceResult;

// Runs of spaces/tabs right before a `\n` or the end of input. A `\r` ends
// the run, so CRLF lines keep whatever precedes the `\r`.
static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)[ \t]+$").expect("Failed to compile trailing whitespace pattern")
});

/// Strips spaces and tabs from the end of every line
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespaceStripper;

impl FileTransform for TrailingWhitespaceStripper {
    fn name(&self) -> &'static str {
        "trailingspace"
    }

    fn apply(&self, path: &Path) -> WhitespaceResult<()> {
        rewrite_in_place(path, strip_trailing_whitespace).map(|_| ())
    }
}

/// Remove trailing space/tab runs from every `\n`-separated line.
///
/// Line count, leading whitespace and the presence of a final newline are
/// unchanged. Bytes need not be valid UTF-8.
pub fn strip_trailing_whitespace(content: &[u8]) -> Vec<u8> {
    TRAILING_WHITESPACE.replace_all(content, &b""[..]).into_owned()
}
