pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
pub mod transform;
pub mod walker;

pub use config::ProcessingOptions;
pub use error::{WhitespaceError, WhitespaceResult};
pub use transform::{FileTransform, NewlineNormalizer, TrailingWhitespaceStripper};
pub use walker::walk;

use std::path::Path;

/// Ensure every selected file under `target` ends with exactly one newline
pub fn process_newline(
    target: impl AsRef<Path>,
    options: &ProcessingOptions,
) -> WhitespaceResult<()> {
    walk(target.as_ref(), options, &NewlineNormalizer)
}

/// Strip trailing spaces and tabs from every line of the selected files under `target`
pub fn process_trailingspace(
    target: impl AsRef<Path>,
    options: &ProcessingOptions,
) -> WhitespaceResult<()> {
    walk(target.as_ref(), options, &TrailingWhitespaceStripper)
}

pub fn newline(target: impl AsRef<Path>) -> WhitespaceResult<()> {
    process_newline(target, &ProcessingOptions::default())
}

pub fn trailingspace(target: impl AsRef<Path>) -> WhitespaceResult<()> {
    process_trailingspace(target, &ProcessingOptions::default())
}
