pub mod newline;
pub mod trailing;

pub use newline::{normalize_newlines, NewlineNormalizer};
pub use trailing::{strip_trailing_whitespace, TrailingWhitespaceStripper};

use std::path::Path;

use crate::error::WhitespaceResult;
use crate::storage::AtomicFile;

/// A per-file content rewrite driven by the walker
pub trait FileTransform {
    /// Short name used in log events
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Rewrite the file at `path` in place
    fn apply(&self, path: &Path) -> WhitespaceResult<()>;
}

/// Read `path`, run `rewrite` over its bytes and store the result.
///
/// The original permissions are kept. Nothing is written when the rewrite
/// leaves the bytes unchanged. Returns whether the file was modified.
pub fn rewrite_in_place<F>(path: &Path, rewrite: F) -> WhitespaceResult<bool>
where
    F: FnOnce(&[u8]) -> Vec<u8>,
{
    let file = AtomicFile::new(path)?;
    let permissions = file.permissions()?;
    let content = file.read()?;

    let rewritten = rewrite(&content);
    if rewritten == content {
        tracing::trace!(path = %path.display(), "already normalized");
        return Ok(false);
    }

    file.write(&rewritten, permissions)?;
    tracing::info!(
        path = %path.display(),
        before = content.len(),
        after = rewritten.len(),
        "rewrote file"
    );
    Ok(true)
}
