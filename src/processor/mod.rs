//! Applies the rule set to a single file
//!
//! The file is read once, every rule runs against the in-memory content in
//! order, and the file is written back at most once.

use crate::domain::violations::{FormatError, FormatResult, RunMode, Violation};
use crate::rules::RuleSet;
use std::fs;
use std::io::Write;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Checks one file against every rule and rewrites it in fix mode
#[derive(Debug)]
pub struct FileProcessor<'a> {
    rules: &'a RuleSet,
    mode: RunMode,
}

impl<'a> FileProcessor<'a> {
    pub fn new(rules: &'a RuleSet, mode: RunMode) -> Self {
        Self { rules, mode }
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Process a single file, returning whether every rule validated
    ///
    /// The result reflects the content as found on disk. A file repaired in
    /// fix mode still reports `false`.
    pub fn process_file<P: AsRef<Path>, W: Write>(
        &self,
        file_path: P,
        out: &mut W,
    ) -> FormatResult<bool> {
        let file_path = file_path.as_ref();
        tracing::debug!("Processing file {}", file_path.display());

        let mut content = read_text(file_path)?;
        let mut success = true;

        for rule in self.rules.iter() {
            if rule.validate(file_path, &content) {
                continue;
            }

            success = false;
            match self.mode {
                RunMode::Fix => content = rule.fix(file_path, &content),
                RunMode::Report => {
                    writeln!(out, "{}", Violation::new(rule.name(), file_path))?;
                }
            }
        }

        if self.mode.is_fix() && !success {
            fs::write(file_path, content)
                .map_err(|e| FormatError::io(file_path, e))?;
            tracing::info!("Fixed {}", file_path.display());
        }

        Ok(success)
    }
}

/// Read a file as text, dropping a leading byte-order mark
///
/// Invalid UTF-8 sequences decode to U+FFFD, so binary assets sitting next to
/// sources never stop a run.
fn read_text(path: &Path) -> FormatResult<String> {
    let bytes = fs::read(path).map_err(|e| FormatError::io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(match content.strip_prefix(BYTE_ORDER_MARK) {
        Some(stripped) => stripped.to_string(),
        None => content.into_owned(),
    })
}
