//! Line-based scanner for Go test files
//!
//! Recognizes just enough Go to attach doc comments to functions:
//! - the `package` clause
//! - runs of `//` line comments
//! - top-level `func Name(` declarations (methods with a receiver are skipped)
//!
//! A doc comment is the run of `//` lines directly above a declaration. Any other line,
//! including a blank one, breaks the run. Directive lines (`//go:noinline`, `//nolint:lll`,
//! `//line`, `//export`, `//extern`) stay inside the run but are not doc text.

use super::DiscoveryError;
use crate::trace::DocumentedFunction;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static PACKAGE_CLAUSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^package\s+([A-Za-z_][A-Za-z0-9_]*)").unwrap());

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:line |extern |export |[a-z0-9]+:[a-z0-9])").unwrap());

static FUNC_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^func\s+([A-Za-z_][A-Za-z0-9_]*)\s*[\[(]").unwrap());

/// Which functions count as tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoScanner {
    function_prefix: String,
}

impl GoScanner {
    pub fn new(function_prefix: impl Into<String>) -> Self {
        Self {
            function_prefix: function_prefix.into(),
        }
    }

    pub fn function_prefix(&self) -> &str {
        &self.function_prefix
    }

    /// True for exported functions carrying the test prefix.
    pub fn is_test_function(&self, name: &str) -> bool {
        name.starts_with(&self.function_prefix)
            && name.chars().next().is_some_and(char::is_uppercase)
    }

    /// Scan one file's text. `path` is only used for metadata and diagnostics.
    pub fn scan(&self, path: &Path, source: &str) -> Result<Vec<DocumentedFunction>, DiscoveryError> {
        let mut package = None;
        let mut comment: Vec<&str> = Vec::new();
        let mut functions = Vec::new();
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        for (index, raw) in source.lines().enumerate() {
            if let Some(text) = raw.strip_prefix("//") {
                if DIRECTIVE.is_match(text) {
                    continue;
                }
                comment.push(text.strip_prefix(' ').unwrap_or(text));
                continue;
            }

            if package.is_none() {
                if let Some(captures) = PACKAGE_CLAUSE.captures(raw) {
                    package = Some(captures[1].to_string());
                    comment.clear();
                    continue;
                }
            }

            if let Some(captures) = FUNC_DECL.captures(raw) {
                let name = &captures[1];
                if self.is_test_function(name) && !comment.is_empty() {
                    let package = package
                        .clone()
                        .ok_or_else(|| DiscoveryError::MissingPackage {
                            path: path.to_path_buf(),
                        })?;
                    functions.push(DocumentedFunction {
                        name: name.to_string(),
                        package,
                        file: file.clone(),
                        line: index + 1,
                        doc: doc_text(&comment),
                    });
                } else {
                    tracing::debug!(function = name, "skipping function");
                }
            }

            comment.clear();
        }

        if package.is_none() {
            return Err(DiscoveryError::MissingPackage {
                path: path.to_path_buf(),
            });
        }

        Ok(functions)
    }
}

impl Default for GoScanner {
    fn default() -> Self {
        Self::new("Test")
    }
}

/// Join comment lines, dropping leading and trailing blank ones.
fn doc_text(lines: &[&str]) -> String {
    let start = lines.iter().position(|line| !line.trim().is_empty());
    let end = lines.iter().rposition(|line| !line.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => {
            let mut doc = lines[start..=end].join("\n");
            doc.push('\n');
            doc
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{FunctionSource, MemorySource};

    const SOURCE: &str = "\
package payments

import \"testing\"

// Blah is not a test function so should be ignored
//
// FEATURE(ABT-1233): Test this function is ignored.
func Blah() {
}

// testMeh is not exported
func testMeh() {}

// TestTransfer tests transfer between accounts
// FEATURE(ABT-909): Create a payment between two accounts owned by the same
// entity.
func TestTransfer(_ *testing.T) {
}

// TestDetached has a gap before the declaration

func TestDetached(_ *testing.T) {}

func TestUndocumented(_ *testing.T) {}

// TestMethod is a method, not a top-level function
func (s *Suite) TestMethod(_ *testing.T) {}
";

    #[test]
    fn test_scan_keeps_documented_exported_tests() {
        let functions = GoScanner::default()
            .scan(Path::new("pkg/payments_test.go"), SOURCE)
            .unwrap();

        assert_eq!(functions.len(), 1);
        let transfer = &functions[0];
        assert_eq!(transfer.name, "TestTransfer");
        assert_eq!(transfer.package, "payments");
        assert_eq!(transfer.file, "payments_test.go");
        assert_eq!(transfer.line, 17);
        assert_eq!(
            transfer.doc,
            "TestTransfer tests transfer between accounts\n\
             FEATURE(ABT-909): Create a payment between two accounts owned by the same\n\
             entity.\n"
        );
    }

    #[test]
    fn test_is_test_function() {
        let scanner = GoScanner::default();
        assert!(scanner.is_test_function("TestPayAnyone"));
        assert!(scanner.is_test_function("Testing"));
        assert!(!scanner.is_test_function("testMeh"));
        assert!(!scanner.is_test_function("Blah"));
        assert!(!GoScanner::new("").is_test_function("helper"));
    }

    #[test]
    fn test_missing_package_is_an_error() {
        let err = GoScanner::default()
            .scan(Path::new("broken_test.go"), "// TestX\nfunc TestX() {}\n")
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::MissingPackage { .. }));
    }

    #[test]
    fn test_directives_are_not_doc_text() {
        let source = "\
package payments

// BUG(ABT-1): fix the thing
//nolint:paralleltest
//go:noinline
//export TestX
// nolint:kept because of the space
func TestX(_ *testing.T) {}
";
        let functions = GoScanner::default()
            .scan(Path::new("x_test.go"), source)
            .unwrap();

        assert_eq!(functions.len(), 1);
        assert_eq!(
            functions[0].doc,
            "BUG(ABT-1): fix the thing\nnolint:kept because of the space\n"
        );
    }

    #[test]
    fn test_directive_between_trace_and_func_keeps_description() {
        let source = "package p\n\n// BUG(ABT-1): fix the thing\n//nolint:paralleltest\nfunc TestX(_ *testing.T) {}\n";
        let functions = MemorySource::new("x_test.go", source).functions().unwrap();
        let traces = crate::trace::extract(&functions[0].doc);
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].description(), "fix the thing");
    }

    #[test]
    fn test_doc_text_trims_blank_edges() {
        assert_eq!(doc_text(&["", "a", "", "b", ""]), "a\n\nb\n");
        assert_eq!(doc_text(&["", ""]), "");
    }
}
