//! License header rule
//!
//! Source files with the recognized extension must start with a fixed
//! copyright notice. Fixing prepends the header after stripping leading
//! whitespace; an existing near-match further down is left alone.

use super::FormattingRule;
use std::path::Path;

/// Line ending used when joining and separating the header
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Extension the header is required on
pub const DEFAULT_EXTENSION: &str = "cs";

/// Lines of the required header
pub const DEFAULT_HEADER_LINES: [&str; 2] = [
    "// Copyright (c) .NET Foundation. All rights reserved.",
    "// Licensed under the Apache License, Version 2.0. See License.txt in the project root for license information.",
];

/// Requires files with a given extension to begin with a license header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseHeaderRule {
    header: String,
    extension: String,
}

impl LicenseHeaderRule {
    /// Create a rule from header lines and the extension it applies to
    ///
    /// The extension is given without a leading dot, e.g. `cs`.
    pub fn new<S: AsRef<str>>(lines: &[S], extension: impl Into<String>) -> Self {
        let header = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join(LINE_ENDING);

        Self {
            header,
            extension: extension.into(),
        }
    }

    /// The exact text a conforming file starts with
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn applies_to(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some(self.extension.as_str())
    }
}

impl Default for LicenseHeaderRule {
    fn default() -> Self {
        Self::new(&DEFAULT_HEADER_LINES, DEFAULT_EXTENSION)
    }
}

impl FormattingRule for LicenseHeaderRule {
    fn name(&self) -> &str {
        "LicenseHeaderRule"
    }

    fn validate(&self, path: &Path, content: &str) -> bool {
        !self.applies_to(path) || content.starts_with(&self.header)
    }

    fn fix(&self, path: &Path, content: &str) -> String {
        if !self.applies_to(path) {
            return content.to_string();
        }

        let body = content.trim_start();
        let mut fixed =
            String::with_capacity(self.header.len() + 2 * LINE_ENDING.len() + body.len());
        fixed.push_str(&self.header);
        fixed.push_str(LINE_ENDING);
        fixed.push_str(LINE_ENDING);
        fixed.push_str(body);
        fixed
    }
}
