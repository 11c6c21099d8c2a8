use std::path::Path;

use super::{rewrite_in_place, FileTransform};
use crate::error::WhitespaceResult;

/// Ends every file with exactly one `\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct NewlineNormalizer;

impl FileTransform for NewlineNormalizer {
    fn name(&self) -> &'static str {
        "newline"
    }

    fn apply(&self, path: &Path) -> WhitespaceResult<()> {
        rewrite_in_place(path, normalize_newlines).map(|_| ())
    }
}

/// Drop the trailing run of `\r`/`\n` bytes and append a single `\n`.
///
/// Everything before the run, including trailing spaces and internal
/// line endings, is kept byte for byte.
pub fn normalize_newlines(content: &[u8]) -> Vec<u8> {
    let end = content
        .iter()
        .rposition(|&b| b != b'\r' && b != b'\n')
        .map_or(0, |idx| idx + 1);

    let mut output = Vec::with_capacity(end + 1);
    output.extend_from_slice(&content[..end]);
    output.push(b'\n');
    output
}
