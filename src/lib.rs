//! aspnet-fmt - checks source trees against ASP.NET code style rules
//!
//! The pipeline is CLI -> directory walker -> file processor -> rule set.
//! Paths and content flow down; success flags flow back up and are ANDed.

pub mod config;
pub mod domain;
pub mod filter;
pub mod processor;
pub mod rules;
pub mod walker;

// Re-export main types for convenient access
pub use domain::violations::{FormatError, FormatResult, RunMode, Violation};

pub use config::{FormatterConfig, LicenseHeaderConfig};

pub use filter::DirectoryFilter;

pub use processor::FileProcessor;

pub use rules::{FormattingRule, LicenseHeaderRule, RuleSet};

pub use walker::DirectoryWalker;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Main formatter wiring configuration, rules and traversal together
#[derive(Debug)]
pub struct Formatter {
    rules: RuleSet,
    filter: DirectoryFilter,
    mode: RunMode,
}

impl Formatter {
    /// Create a formatter from a validated configuration
    pub fn new(config: &FormatterConfig, mode: RunMode) -> FormatResult<Self> {
        config.validate()?;

        Ok(Self {
            rules: RuleSet::from_config(config),
            filter: DirectoryFilter::from_config(config),
            mode,
        })
    }

    /// Create a formatter with the built-in rules and exclusions
    pub fn with_defaults(mode: RunMode) -> Self {
        let config = FormatterConfig::default();
        Self {
            rules: RuleSet::from_config(&config),
            filter: DirectoryFilter::from_config(&config),
            mode,
        }
    }

    /// Add a rule after the configured ones
    pub fn with_rule<R: FormattingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Walk a single directory tree
    pub fn process_directory<P: AsRef<Path>, W: Write>(
        &self,
        root: P,
        out: &mut W,
    ) -> FormatResult<bool> {
        self.walker().walk(root, out)
    }

    /// Process a single file against every rule
    pub fn process_file<P: AsRef<Path>, W: Write>(
        &self,
        file: P,
        out: &mut W,
    ) -> FormatResult<bool> {
        FileProcessor::new(&self.rules, self.mode).process_file(file, out)
    }

    /// Run over every directory, printing the banner first
    ///
    /// Returns true only if every directory fully succeeded.
    pub fn run<W: Write>(&self, directories: &[PathBuf], out: &mut W) -> FormatResult<bool> {
        writeln!(out, "Processing files in the following directories: ")?;
        for dir in directories {
            writeln!(out, "* {}", dir.display())?;
        }

        writeln!(out, "Starting run...")?;
        tracing::debug!(rules = ?self.rules.names(), mode = ?self.mode, "Starting run");

        let mut success = true;
        for dir in directories {
            success &= self.process_directory(dir, out)?;
        }

        Ok(success)
    }

    fn walker(&self) -> DirectoryWalker<'_> {
        DirectoryWalker::new(&self.filter, FileProcessor::new(&self.rules, self.mode))
    }
}

/// Resolve the directories to scan, defaulting to the working directory
pub fn resolve_directories(directories: Vec<PathBuf>) -> FormatResult<Vec<PathBuf>> {
    if !directories.is_empty() {
        return Ok(directories);
    }

    let cwd = std::env::current_dir().map_err(|e| FormatError::io(".", e))?;
    Ok(vec![cwd])
}

/// Convenience function to check a directory with default settings
pub fn check_directory<P: AsRef<Path>>(directory: P) -> FormatResult<bool> {
    Formatter::with_defaults(RunMode::Report)
        .process_directory(directory, &mut std::io::sink())
}

/// Convenience function to fix a directory with default settings
///
/// Returns false when any file had to be rewritten.
pub fn fix_directory<P: AsRef<Path>>(directory: P) -> FormatResult<bool> {
    Formatter::with_defaults(RunMode::Fix)
        .process_directory(directory, &mut std::io::sink())
}
