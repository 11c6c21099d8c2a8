/// Per-invocation processing options.
///
/// Options are plain data: exclude patterns are compiled by the walk that
/// receives them and never cached beyond it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingOptions {
    /// Descend into hidden subdirectories during a recursive walk
    pub include_hidden: bool,
    /// Glob patterns excluding files and whole subtrees, in the order given
    pub exclude_patterns: Vec<String>,
}

impl ProcessingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }
}
