//! Source availability tracking
//!
//! [`SourceIndex`] answers "can we navigate into this file" for the paths
//! shown in the pane. It is populated as a side effect of frame appends and
//! cleared in lockstep with the frame store.
//!
//! Only positive observations are recorded: a frame with `have_source = false`
//! leaves no trace (absence means "unknown/not found"), and once a path has
//! been recorded a later negative observation never downgrades it. Since the
//! index therefore only ever holds located paths, it is kept as a set.

use std::collections::HashSet;

/// Per-path record of "the source file was located on disk".
#[derive(Debug, Default)]
pub struct SourceIndex {
    located: HashSet<String>,
}

impl SourceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            located: HashSet::new(),
        }
    }

    /// Record an observation for `path`.
    ///
    /// Records the path on the first positive observation; every other
    /// combination is a no-op.
    pub fn record(&mut self, path: &str, have_source: bool) {
        if have_source && !self.located.contains(path) {
            self.located.insert(path.to_string());
        }
    }

    /// True only if `path` is non-empty and was positively recorded.
    pub fn has_source(&self, path: &str) -> bool {
        !path.is_empty() && self.located.contains(path)
    }

    /// Forget every recorded path.
    pub fn clear(&mut self) {
        self.located.clear();
    }

    /// Number of recorded paths.
    pub fn len(&self) -> usize {
        self.located.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.located.is_empty()
    }
}
