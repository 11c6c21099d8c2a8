pub mod filter;
pub mod heuristic;

pub use filter::{Decision, ExcludeSet, PathFilter, SkipReason};
pub use heuristic::looks_text;

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::ProcessingOptions;
use crate::error::{WhitespaceError, WhitespaceResult};
use crate::transform::FileTransform;

/// Apply `transform` to `root`.
///
/// A regular file root is always transformed, whatever its name or content.
/// A directory root is walked depth-first; hidden subdirectories, excluded
/// entries and non-text files are skipped. The first error aborts the walk.
pub fn walk<T>(root: &Path, options: &ProcessingOptions, transform: &T) -> WhitespaceResult<()>
where
    T: FileTransform + ?Sized,
{
    // Bad patterns must fail before any file is touched
    let filter = PathFilter::new(options)?;

    let metadata = match fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(WhitespaceError::InvalidTarget {
                path: root.to_path_buf(),
            });
        }
        Err(e) => return Err(WhitespaceError::io(root, e)),
    };

    if metadata.is_file() {
        tracing::debug!(path = %root.display(), transform = transform.name(), "processing file target");
        return transform.apply(root);
    }

    if metadata.is_dir() {
        return walk_dir(root, &filter, transform);
    }

    Err(WhitespaceError::InvalidTarget {
        path: root.to_path_buf(),
    })
}

fn walk_dir<T>(root: &Path, filter: &PathFilter, transform: &T) -> WhitespaceResult<()>
where
    T: FileTransform + ?Sized,
{
    let mut entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_dir() {
            if let Decision::SkipSubtree(_) = filter.classify_dir(path, root) {
                entries.skip_current_dir();
            }
            continue;
        }

        if filter.classify_file(path, root)? == Decision::Process {
            tracing::debug!(path = %path.display(), transform = transform.name(), "processing file");
            transform.apply(path)?;
        }
    }

    Ok(())
}
