//! Formatting rules applied to the full text of a file
//!
//! A rule is a pure check-and-correct unit. Rules never touch the filesystem;
//! the file processor owns all reads and writes.

pub mod license_header;

use crate::config::FormatterConfig;
use std::fmt;
use std::path::Path;

pub use license_header::LicenseHeaderRule;

/// Contract every formatting rule implements
///
/// `validate(path, &fix(path, content))` must hold for any input.
pub trait FormattingRule: Send + Sync {
    /// Stable identifier printed in violation lines
    fn name(&self) -> &str;

    /// Whether the content already satisfies this rule for the given path
    fn validate(&self, path: &Path, content: &str) -> bool;

    /// Return content that satisfies this rule
    ///
    /// Content is returned unchanged when the rule does not apply to the path.
    fn fix(&self, path: &Path, content: &str) -> String;
}

/// Ordered collection of rules, fixed for the lifetime of a run
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn FormattingRule>>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build the rules enabled by the configuration
    pub fn from_config(config: &FormatterConfig) -> Self {
        let mut rules = Self::new();

        if config.license_header.enabled {
            rules.push(LicenseHeaderRule::new(
                &config.license_header.lines,
                config.license_header.extension.clone(),
            ));
        }

        rules
    }

    /// Append a rule; rules run in insertion order
    pub fn push<R: FormattingRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn FormattingRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the rules in run order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.names())
            .finish()
    }
}
