//! Function sources backed by memory or the filesystem.

use super::{DiscoveryError, FunctionSource, GoScanner};
use crate::trace::DocumentedFunction;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// A single named source text held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    path: PathBuf,
    text: String,
    scanner: GoScanner,
}

impl MemorySource {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            scanner: GoScanner::default(),
        }
    }

    pub fn with_scanner(mut self, scanner: GoScanner) -> Self {
        self.scanner = scanner;
        self
    }
}

impl FunctionSource for MemorySource {
    fn functions(&self) -> Result<Vec<DocumentedFunction>, DiscoveryError> {
        self.scanner.scan(&self.path, &self.text)
    }
}

/// Test files under a directory, selected by file name suffix.
///
/// Only the directory itself is read unless [`recursive`](Self::recursive) is set, in which
/// case the walk honors `.gitignore` files.
#[derive(Debug, Clone)]
pub struct PathSource {
    root: PathBuf,
    file_suffix: String,
    recursive: bool,
    scanner: GoScanner,
}

impl PathSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_suffix: "_test.go".to_string(),
            recursive: false,
            scanner: GoScanner::default(),
        }
    }

    pub fn file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.file_suffix = suffix.into();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_scanner(mut self, scanner: GoScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Matching files, sorted by path.
    pub fn files(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        let mut files = if self.recursive {
            self.walk()?
        } else {
            self.read_dir()?
        };
        files.retain(|path| self.is_candidate(path));
        files.sort();
        Ok(files)
    }

    fn is_candidate(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.file_suffix))
    }

    fn read_dir(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        let io_error = |source: std::io::Error| DiscoveryError::Io {
            path: self.root.clone(),
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            if entry.file_type().map_err(io_error)?.is_file() {
                files.push(entry.path());
            }
        }
        Ok(files)
    }

    fn walk(&self) -> Result<Vec<PathBuf>, DiscoveryError> {
        let mut files = Vec::new();
        for entry in WalkBuilder::new(&self.root).build() {
            let entry = entry.map_err(|source| DiscoveryError::Walk {
                path: self.root.clone(),
                source,
            })?;
            if entry.file_type().is_some_and(|kind| kind.is_file()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

impl FunctionSource for PathSource {
    fn functions(&self) -> Result<Vec<DocumentedFunction>, DiscoveryError> {
        let files = self.files()?;
        let mut functions = Vec::new();
        for path in &files {
            let text = fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
                path: path.clone(),
                source,
            })?;
            functions.extend(self.scanner.scan(path, &text)?);
        }
        tracing::info!(
            root = %self.root.display(),
            files = files.len(),
            functions = functions.len(),
            "discovered test functions"
        );
        Ok(functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, text: &str) {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    const TEST_FILE: &str = "package a\n\n// FEATURE(ABT-1): one\nfunc TestOne(t *testing.T) {}\n";

    #[test]
    fn test_only_suffixed_files_are_read() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b_test.go", TEST_FILE);
        write(dir.path(), "a_test.go", TEST_FILE);
        write(dir.path(), "a.go", "not go at all");
        write(dir.path(), "nested/c_test.go", TEST_FILE);

        let source = PathSource::new(dir.path());
        let names: Vec<_> = source
            .files()
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_test.go", "b_test.go"]);

        let functions = source.functions().unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0].file, "a_test.go");
    }

    #[test]
    fn test_recursive_walk_includes_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a_test.go", TEST_FILE);
        write(dir.path(), "nested/c_test.go", TEST_FILE);

        let files = PathSource::new(dir.path()).recursive(true).files().unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PathSource::new(dir.path().join("absent"))
            .functions()
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Io { .. }));
    }

    #[test]
    fn test_memory_source_uses_scanner() {
        let source = MemorySource::new("x_test.go", TEST_FILE).with_scanner(GoScanner::new("Check"));
        assert!(source.functions().unwrap().is_empty());
    }
}
