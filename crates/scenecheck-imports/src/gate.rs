//! Memoized compliance gate
//!
//! The verdict is computed on first use and reused for the lifetime of the
//! gate. Each gate owns its own cell, so separate grading contexts never see
//! each other's verdicts.

use crate::error::{ScanFailure, ScanVerdict};
use crate::scanner::{ImportScan, RegexImportScanner};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Import gate over one source root
#[derive(Debug)]
pub struct ImportGate<S = RegexImportScanner> {
    scanner: S,
    root: PathBuf,
    verdict: OnceCell<ScanVerdict>,
}

impl<S: ImportScan> ImportGate<S> {
    /// Create gate scanning `root` with `scanner`
    pub fn new(scanner: S, root: impl Into<PathBuf>) -> Self {
        Self {
            scanner,
            root: root.into(),
            verdict: OnceCell::new(),
        }
    }

    /// Get scan root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get scanner
    #[inline]
    #[must_use]
    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Check if the verdict has been computed
    #[inline]
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.verdict.get().is_some()
    }

    /// Get verdict, scanning on first call only
    pub fn verdict(&self) -> &ScanVerdict {
        self.verdict.get_or_init(|| {
            tracing::info!(root = %self.root.display(), "scanning imports");
            self.scanner.scan(&self.root)
        })
    }

    /// Require a passing verdict
    ///
    /// A failure is logged at error level before being returned.
    pub fn require_pass(&self) -> Result<(), ScanFailure> {
        match self.verdict() {
            ScanVerdict::Pass => Ok(()),
            ScanVerdict::Fail(failure) => {
                tracing::error!("failed: {failure}");
                Err(failure.clone())
            }
        }
    }

    /// Panic with the failure reason unless the verdict passes
    ///
    /// # Panics
    ///
    /// Panics when the cached verdict is a failure.
    pub fn assert_pass(&self) {
        if let Err(failure) = self.require_pass() {
            panic!("{failure}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::MockImportScan;

    #[test]
    fn verdict_is_computed_once() {
        let mut scan = MockImportScan::new();
        scan.expect_scan().times(1).returning(|_| ScanVerdict::Pass);

        let gate = ImportGate::new(scan, "submission");
        assert!(!gate.is_cached());
        assert!(gate.verdict().is_pass());
        assert!(gate.is_cached());
        assert!(gate.require_pass().is_ok());
        gate.assert_pass();
    }

    #[test]
    fn failing_verdict_is_reused() {
        let mut scan = MockImportScan::new();
        scan.expect_scan()
            .times(1)
            .returning(|_| ScanVerdict::Fail(ScanFailure::disallowed("java.net.Socket;", "Net.java")));

        let gate = ImportGate::new(scan, "submission");
        let first = gate.require_pass().unwrap_err();
        let second = gate.require_pass().unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn gate_scans_its_own_root() {
        let mut scan = MockImportScan::new();
        scan.expect_scan()
            .withf(|root| root.ends_with("student/src"))
            .times(1)
            .returning(|_| ScanVerdict::Pass);

        let gate = ImportGate::new(scan, "student/src");
        assert_eq!(gate.root(), Path::new("student/src"));
        assert!(gate.verdict().is_pass());
    }

    #[test]
    fn separate_gates_do_not_share_verdicts() {
        let mut passing = MockImportScan::new();
        passing.expect_scan().times(1).returning(|_| ScanVerdict::Pass);
        let mut failing = MockImportScan::new();
        failing.expect_scan().times(1).returning(|_| ScanVerdict::Fail(ScanFailure::Io));

        let a = ImportGate::new(passing, ".");
        let b = ImportGate::new(failing, ".");
        assert!(a.verdict().is_pass());
        assert_eq!(b.verdict(), &ScanVerdict::Fail(ScanFailure::Io));
    }

    #[test]
    #[should_panic(expected = "is not allowed in the file")]
    fn assert_pass_panics_with_reason() {
        let mut scan = MockImportScan::new();
        scan.expect_scan()
            .returning(|_| ScanVerdict::Fail(ScanFailure::disallowed("java.net.Socket;", "Net.java")));
        ImportGate::new(scan, ".").assert_pass();
    }
}
