//! Directory walk and per-file import checks

use crate::error::{PolicyError, ScanFailure, ScanVerdict};
use crate::extract::extract_imports;
use crate::policy::{CompiledPolicy, ImportPolicy};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Something that can produce a verdict for a source tree
#[cfg_attr(test, mockall::automock)]
pub trait ImportScan {
    /// Scan the tree rooted at `root`
    fn scan(&self, root: &Path) -> ScanVerdict;
}

/// Whitelist scanner over a directory tree
#[derive(Debug, Clone)]
pub struct RegexImportScanner {
    policy: CompiledPolicy,
}

impl RegexImportScanner {
    /// Create scanner for policy
    pub fn new(policy: &ImportPolicy) -> Result<Self, PolicyError> {
        Ok(Self {
            policy: policy.compile()?,
        })
    }

    /// Get compiled policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &CompiledPolicy {
        &self.policy
    }

    /// First disallowed import in source text
    #[must_use]
    pub fn first_disallowed(&self, source: &str) -> Option<String> {
        extract_imports(source)
            .into_iter()
            .find(|import| !self.policy.allows(import))
    }

    /// Check one source file
    ///
    /// A read failure is reported as [`ScanFailure::Io`], with the
    /// underlying error logged.
    pub fn check_source(&self, path: &Path) -> Result<(), ScanFailure> {
        match self.read_first_disallowed(path) {
            Ok(None) => {
                tracing::debug!(path = %path.display(), "imports allowed");
                Ok(())
            }
            Ok(Some(import)) => {
                tracing::warn!(path = %path.display(), %import, "disallowed import");
                Err(ScanFailure::disallowed(import, path))
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "could not read source file");
                Err(ScanFailure::Io)
            }
        }
    }

    fn read_first_disallowed(&self, path: &Path) -> io::Result<Option<String>> {
        let bytes = fs::read(path)?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.first_disallowed(&source))
    }
}

impl ImportScan for RegexImportScanner {
    fn scan(&self, root: &Path) -> ScanVerdict {
        let mut files_scanned = 0usize;

        // Directory-entry order; no sorting. Links are followed, so a link
        // cycle surfaces as a walk error.
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::error!(root = %root.display(), error = %err, "import scan could not walk tree");
                    return ScanVerdict::Fail(ScanFailure::Io);
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.policy.should_scan(&name) {
                tracing::trace!(path = %entry.path().display(), "skipping file");
                continue;
            }

            files_scanned += 1;
            if let Err(failure) = self.check_source(entry.path()) {
                return ScanVerdict::Fail(failure);
            }
        }

        tracing::info!(root = %root.display(), files_scanned, "import scan passed");
        ScanVerdict::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> RegexImportScanner {
        RegexImportScanner::new(&ImportPolicy::default()).unwrap()
    }

    #[test]
    fn first_disallowed_skips_allowed_imports() {
        let source = "import java.util.List;\nimport java.net.Socket;\nimport java.rmi.Remote;\n";
        assert_eq!(
            scanner().first_disallowed(source).as_deref(),
            Some("java.net.Socket;")
        );
    }

    #[test]
    fn clean_source_has_no_violation() {
        let source = "import java.awt.Color;\nimport modeler.MainFrame;\nimport java.net.*;\n";
        assert_eq!(scanner().first_disallowed(source), None);
    }

    #[test]
    fn unreadable_source_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Shape.java");
        fs::create_dir(&path).unwrap();
        assert_eq!(scanner().check_source(&path), Err(ScanFailure::Io));
    }

    #[test]
    fn missing_root_is_io_failure() {
        let verdict = scanner().scan(Path::new("/definitely/not/a/real/scan/root"));
        assert_eq!(verdict, ScanVerdict::Fail(ScanFailure::Io));
    }
}
