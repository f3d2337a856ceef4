//! Core domain models for rule violations and run failures
//!
//! A violation is an expected outcome of checking a file and only affects the
//! exit code. A `FormatError` is unexpected and aborts the whole run.

use std::fmt;
use std::path::{Path, PathBuf};

/// How a run treats files that fail a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Print one line per violation and leave files untouched
    #[default]
    Report,
    /// Rewrite failing files so that they satisfy every rule
    Fix,
}

impl RunMode {
    /// Build a mode from the `--fix` switch
    pub fn from_fix_flag(fix: bool) -> Self {
        if fix {
            Self::Fix
        } else {
            Self::Report
        }
    }

    pub fn is_fix(self) -> bool {
        matches!(self, Self::Fix)
    }
}

/// A file that does not satisfy a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Stable identifier of the rule that failed
    pub rule_name: String,
    /// File that failed the rule
    pub file_path: PathBuf,
}

impl Violation {
    /// Create a new violation
    pub fn new(rule_name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            rule_name: rule_name.into(),
            file_path: file_path.into(),
        }
    }

    /// Format violation for display
    pub fn format_display(&self) -> String {
        format!(
            "* {} does not satisfy rule: {}",
            self.file_path.display(),
            self.rule_name
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display())
    }
}

/// Error types that abort a formatting run
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A file or directory could not be read or written
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory enumeration failed
    #[error("Failed to list directory {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    /// Console output could not be written
    #[error("Output error: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl FormatError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an IO error tied to a path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a directory walk error
    pub fn walk(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Walk {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// Result type for formatter operations
pub type FormatResult<T> = Result<T, FormatError>;
