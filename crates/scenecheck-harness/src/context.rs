//! Scoped grading context
//!
//! Owns one import gate and the config for a set of checks. The gate's
//! verdict is computed on first use and shared by every check run through
//! the same context, and by nothing else.

use crate::app::ApplicationLauncher;
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::runner::run_scene;
use crate::scenario::{setup_manipulation, ManipulationRequest, ManipulationScenario};
use scenecheck_image::ComparisonReport;
use scenecheck_imports::{ImportGate, ImportScan, RegexImportScanner};

/// Config plus memoized import gate
#[derive(Debug)]
pub struct GradingContext<S = RegexImportScanner> {
    config: HarnessConfig,
    gate: ImportGate<S>,
}

impl GradingContext<RegexImportScanner> {
    /// Create context scanning `config.scan_root` with `config.imports`
    pub fn new(config: HarnessConfig) -> Result<Self, HarnessError> {
        let scanner = RegexImportScanner::new(&config.imports)?;
        Ok(Self::with_scanner(config, scanner))
    }
}

impl<S: ImportScan> GradingContext<S> {
    /// Create context with a custom scanner
    pub fn with_scanner(config: HarnessConfig, scanner: S) -> Self {
        let gate = ImportGate::new(scanner, config.scan_root.clone());
        Self { config, gate }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Get import gate
    #[inline]
    #[must_use]
    pub fn gate(&self) -> &ImportGate<S> {
        &self.gate
    }

    /// Require the submission's imports to pass
    pub fn imports_pass(&self) -> Result<(), HarnessError> {
        Ok(self.gate.require_pass()?)
    }

    /// Run the scene regression check for `fixture`
    pub fn run_scene<L: ApplicationLauncher>(
        &self,
        launcher: &L,
        fixture: &str,
    ) -> Result<ComparisonReport, HarnessError> {
        let result = run_scene(&self.gate, launcher, &self.config, fixture);
        if let Err(err) = &result {
            tracing::error!(fixture, "failed: {err}");
        }
        result
    }

    /// Run the scene regression check, panicking with the failure text
    ///
    /// # Panics
    ///
    /// Panics when the check fails for any reason.
    pub fn assert_scene<L: ApplicationLauncher>(&self, launcher: &L, fixture: &str) -> ComparisonReport {
        match self.run_scene(launcher, fixture) {
            Ok(report) => report,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a manipulation scenario with the configured shape and settle policy
    pub fn setup_manipulation<L: ApplicationLauncher>(
        &self,
        launcher: &L,
        request: &ManipulationRequest,
    ) -> Result<ManipulationScenario<L::App>, HarnessError> {
        setup_manipulation(launcher, request, self.config.shape, &self.config.manip_settle)
    }
}
