//! Selection rules applied to every entry below the walk root.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

use super::heuristic;
use crate::config::ProcessingOptions;
use crate::error::{WhitespaceError, WhitespaceResult};

/// What the walker should do with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Directory: keep walking into it
    Descend,
    /// Directory: prune it and everything below
    SkipSubtree(SkipReason),
    /// File: hand it to the transform
    Process,
    /// File: leave it alone
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Excluded,
    Hidden,
    NotText,
}

/// Exclude patterns compiled for the lifetime of one walk
#[derive(Debug, Clone)]
pub struct ExcludeSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl ExcludeSet {
    /// Compile every pattern, failing on the first malformed one
    pub fn compile(patterns: &[String]) -> WhitespaceResult<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| WhitespaceError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }

        let set = builder
            .build()
            .map_err(|source| WhitespaceError::InvalidPattern {
                pattern: patterns.join(", "),
                source,
            })?;

        Ok(Self {
            patterns: patterns.to_vec(),
            set,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern matching the path as walked, relative to `root`, or by basename
    pub fn matching_pattern(&self, path: &Path, root: &Path) -> Option<&str> {
        if self.is_empty() {
            return None;
        }

        let relative = path.strip_prefix(root).ok();
        let base = path.file_name().map(Path::new);

        [Some(path), relative, base]
            .into_iter()
            .flatten()
            .filter_map(|candidate| self.set.matches(candidate).into_iter().min())
            .min()
            .map(|idx| self.patterns[idx].as_str())
    }
}

/// Hidden-directory and exclude policy for one walk
#[derive(Debug, Clone)]
pub struct PathFilter {
    include_hidden: bool,
    excludes: ExcludeSet,
}

impl PathFilter {
    pub fn new(options: &ProcessingOptions) -> WhitespaceResult<Self> {
        Ok(Self {
            include_hidden: options.include_hidden,
            excludes: ExcludeSet::compile(&options.exclude_patterns)?,
        })
    }

    /// Decide on a directory below `root`. Never call this for the root itself.
    pub fn classify_dir(&self, path: &Path, root: &Path) -> Decision {
        if let Some(pattern) = self.excludes.matching_pattern(path, root) {
            tracing::debug!(path = %path.display(), pattern, "skipping excluded directory");
            return Decision::SkipSubtree(SkipReason::Excluded);
        }

        if is_hidden(path) && !self.include_hidden {
            tracing::debug!(path = %path.display(), "skipping hidden directory");
            return Decision::SkipSubtree(SkipReason::Hidden);
        }

        Decision::Descend
    }

    /// Decide on a non-directory entry below `root`
    pub fn classify_file(&self, path: &Path, root: &Path) -> WhitespaceResult<Decision> {
        if let Some(pattern) = self.excludes.matching_pattern(path, root) {
            tracing::debug!(path = %path.display(), pattern, "skipping excluded file");
            return Ok(Decision::Skip(SkipReason::Excluded));
        }

        if !heuristic::looks_text(path)? {
            tracing::debug!(path = %path.display(), "skipping non-text file");
            return Ok(Decision::Skip(SkipReason::NotText));
        }

        Ok(Decision::Process)
    }
}

/// Basename starts with a dot
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
