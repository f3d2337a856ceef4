//! Depth-first traversal of a directory tree
//!
//! At each level the direct files are processed first, then each direct
//! subdirectory is walked in turn. Entries are visited in file-name order.
//! There is no cycle detection; a symlink loop recurses until the OS refuses.

use crate::domain::violations::{FormatError, FormatResult};
use crate::filter::DirectoryFilter;
use crate::processor::FileProcessor;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks directories and hands every regular file to the file processor
#[derive(Debug)]
pub struct DirectoryWalker<'a> {
    filter: &'a DirectoryFilter,
    processor: FileProcessor<'a>,
}

impl<'a> DirectoryWalker<'a> {
    pub fn new(filter: &'a DirectoryFilter, processor: FileProcessor<'a>) -> Self {
        Self { filter, processor }
    }

    /// Walk the tree rooted at `root`, returning whether every file passed
    ///
    /// An excluded directory is reported and counts as a success.
    pub fn walk<P: AsRef<Path>, W: Write>(&self, root: P, out: &mut W) -> FormatResult<bool> {
        let root = root.as_ref();

        if self.filter.is_excluded(root) {
            writeln!(out, "* Excluded directory {}.", root.display())?;
            tracing::debug!("Skipping excluded directory {}", root.display());
            return Ok(true);
        }

        tracing::debug!("Walking directory {}", root.display());
        let (files, directories) = list_entries(root)?;

        let mut success = true;
        for file in &files {
            success &= self.processor.process_file(file, out)?;
        }

        for directory in &directories {
            success &= self.walk(directory, out)?;
        }

        Ok(success)
    }
}

/// Split the direct children of `dir` into files and subdirectories
fn list_entries(dir: &Path) -> FormatResult<(Vec<PathBuf>, Vec<PathBuf>)> {
    if !dir.is_dir() {
        return Err(FormatError::walk(dir, "not a directory"));
    }

    let mut files = Vec::new();
    let mut directories = Vec::new();

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = entry.map_err(|e| FormatError::walk(dir, e.to_string()))?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            directories.push(entry.into_path());
        } else if file_type.is_file() {
            files.push(entry.into_path());
        } else {
            tracing::debug!("Skipping special file {}", entry.path().display());
        }
    }

    Ok((files, directories))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::violations::RunMode;
    use crate::rules::license_header::{LicenseHeaderRule, LINE_ENDING};
    use crate::rules::RuleSet;
    use std::fs;
    use tempfile::TempDir;

    fn default_rules() -> RuleSet {
        let mut rules = RuleSet::new();
        rules.push(LicenseHeaderRule::default());
        rules
    }

    fn good_content() -> String {
        format!(
            "{}{LINE_ENDING}{LINE_ENDING}class Good {{}}",
            LicenseHeaderRule::default().header()
        )
    }

    fn walk(root: &Path, mode: RunMode) -> FormatResult<(bool, String)> {
        let rules = default_rules();
        let filter = DirectoryFilter::default();
        let walker = DirectoryWalker::new(&filter, FileProcessor::new(&rules, mode));

        let mut out = Vec::new();
        let success = walker.walk(root, &mut out)?;
        Ok((success, String::from_utf8(out).unwrap()))
    }

    #[test]
    fn test_empty_directory_succeeds_silently() -> FormatResult<()> {
        let temp_dir = TempDir::new().unwrap();

        let (success, output) = walk(temp_dir.path(), RunMode::Report)?;
        assert!(success);
        assert!(output.is_empty());
        Ok(())
    }

    #[test]
    fn test_nested_excluded_directory_is_never_visited() -> FormatResult<()> {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let nested_bin = root.join("src/lib/deep/bin");
        fs::create_dir_all(&nested_bin).unwrap();
        fs::write(nested_bin.join("Bad.cs"), "class Bad {}").unwrap();
        fs::write(root.join("src/Good.cs"), good_content()).unwrap();

        let (success, output) = walk(root, RunMode::Fix)?;

        assert!(success);
        assert_eq!(output, format!("* Excluded directory {}.\n", nested_bin.display()));
        let untouched = fs::read_to_string(nested_bin.join("Bad.cs")).unwrap();
        assert_eq!(untouched, "class Bad {}");
        Ok(())
    }

    #[test]
    fn test_excluded_root_is_a_success() -> FormatResult<()> {
        let temp_dir = TempDir::new().unwrap();
        let obj = temp_dir.path().join("obj");
        fs::create_dir(&obj).unwrap();
        fs::write(obj.join("Bad.cs"), "class Bad {}").unwrap();

        let (success, output) = walk(&obj, RunMode::Report)?;
        assert!(success);
        assert!(output.starts_with("* Excluded directory "));
        Ok(())
    }

    #[test]
    fn test_failure_in_subdirectory_propagates() -> FormatResult<()> {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("Good.cs"), good_content()).unwrap();
        fs::write(root.join("a/b/Bad.cs"), "class Bad {}").unwrap();

        let (success, output) = walk(root, RunMode::Report)?;
        assert!(!success);
        assert_eq!(output.lines().count(), 1);
        assert!(output.contains("Bad.cs does not satisfy rule: LicenseHeaderRule"));
        Ok(())
    }

    #[test]
    fn test_files_before_subdirectories() -> FormatResult<()> {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("a")).unwrap();
        fs::write(root.join("a/Inner.cs"), "class Inner {}").unwrap();
        fs::write(root.join("z.cs"), "class Z {}").unwrap();

        let (_, output) = walk(root, RunMode::Report)?;
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("z.cs"));
        assert!(lines[1].contains("Inner.cs"));
        Ok(())
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = walk(&temp_dir.path().join("missing"), RunMode::Report);
        assert!(matches!(result, Err(FormatError::Walk { .. })));
    }
}
