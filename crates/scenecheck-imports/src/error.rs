//! Scan verdicts and error types for import scanning

use std::fmt;
use std::path::PathBuf;

/// Reason a scan did not pass
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanFailure {
    /// A source file imports a namespace outside the whitelist
    #[error("The import {import} is not allowed in the file {}", .path.display())]
    DisallowedImport {
        /// Canonical import text, e.g. `java.net.Socket;`
        import: String,
        /// File containing the import
        path: PathBuf,
    },

    /// Reading the tree failed; the underlying error is logged, not kept
    #[error("Import code threw an I/O error.")]
    Io,
}

impl ScanFailure {
    /// Create disallowed import failure
    pub fn disallowed(import: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::DisallowedImport {
            import: import.into(),
            path: path.into(),
        }
    }
}

/// Outcome of scanning a tree
///
/// Compared by content. Two failures are equal only when they name the same
/// import in the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanVerdict {
    /// Every scanned import is whitelisted
    Pass,
    /// The scan stopped on the given failure
    Fail(ScanFailure),
}

impl ScanVerdict {
    /// Check if verdict is a pass
    #[inline]
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Get failure reason, if any
    #[inline]
    #[must_use]
    pub fn failure(&self) -> Option<&ScanFailure> {
        match self {
            Self::Pass => None,
            Self::Fail(failure) => Some(failure),
        }
    }

    /// Convert into a result
    pub fn into_result(self) -> Result<(), ScanFailure> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(failure) => Err(failure),
        }
    }
}

impl fmt::Display for ScanVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail(failure) => write!(f, "{failure}"),
        }
    }
}

/// Errors building a scan policy
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Ignore pattern is not a valid regex
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        /// Pattern as configured
        pattern: String,
        /// Regex compile error
        #[source]
        source: regex::Error,
    },

    /// Source extension is empty
    #[error("source extension must not be empty")]
    EmptyExtension,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disallowed_message_names_import_and_file() {
        let failure = ScanFailure::disallowed("java.net.Socket;", "src/net/Client.java");
        let text = failure.to_string();
        assert!(text.contains("java.net.Socket;"));
        assert!(text.contains("Client.java"));
    }

    #[test]
    fn verdicts_compare_by_content() {
        let a = ScanVerdict::Fail(ScanFailure::disallowed(String::from("java.net.URL;"), "A.java"));
        let b = ScanVerdict::Fail(ScanFailure::disallowed("java.net.URL;", PathBuf::from("A.java")));
        assert_eq!(a, b);
        assert_ne!(a, ScanVerdict::Pass);
        assert_eq!(ScanVerdict::Pass.to_string(), "pass");
    }

    #[test]
    fn into_result() {
        assert!(ScanVerdict::Pass.into_result().is_ok());
        assert_eq!(
            ScanVerdict::Fail(ScanFailure::Io).into_result(),
            Err(ScanFailure::Io)
        );
    }
}
