//! Excluded directory matching
//!
//! Exclusion is by exact final path component and applies at every depth,
//! so a nested `bin` is skipped exactly like a top-level one.

use crate::config::FormatterConfig;
use std::collections::HashSet;
use std::path::Path;

/// Set of directory names the walker never descends into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFilter {
    excluded: HashSet<String>,
}

impl DirectoryFilter {
    /// Create a filter from directory names
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a filter from the configured exclusions
    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(config.excluded_directories.iter().cloned())
    }

    /// Whether the directory at `path` is excluded by name
    pub fn is_excluded<P: AsRef<Path>>(&self, path: P) -> bool {
        let name = path.as_ref().file_name().and_then(|name| name.to_str());
        name.is_some_and(|name| self.excluded.contains(name))
    }

    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}

impl Default for DirectoryFilter {
    fn default() -> Self {
        Self::from_config(&FormatterConfig::default())
    }
}
