//! Harness configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! scan_root = "submission"
//! tolerance = 1
//!
//! [assets]
//! dir = "scenes"
//!
//! [manip_settle]
//! timeout_ms = 2000
//! ```

use crate::app::ShapeKind;
use crate::error::ConfigError;
use scenecheck_image::DEFAULT_CHANNEL_TOLERANCE;
use scenecheck_imports::ImportPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where fixture files live and how they are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetLayout {
    /// Test-asset directory
    pub dir: PathBuf,
    /// Scene description suffix
    pub scene_suffix: String,
    /// Suffix of the freshly rendered image
    pub produced_suffix: String,
    /// Suffix of the reference image
    pub reference_suffix: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("scenes"),
            scene_suffix: ".xml".to_string(),
            produced_suffix: ".png".to_string(),
            reference_suffix: ".correct.png".to_string(),
        }
    }
}

impl AssetLayout {
    /// Create layout rooted at `dir` with default suffixes
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Scene description for a fixture
    #[must_use]
    pub fn scene_path(&self, fixture: &str) -> PathBuf {
        self.file(fixture, &self.scene_suffix)
    }

    /// Rendered output for a fixture
    #[must_use]
    pub fn produced_path(&self, fixture: &str) -> PathBuf {
        self.file(fixture, &self.produced_suffix)
    }

    /// Reference image for a fixture
    #[must_use]
    pub fn reference_path(&self, fixture: &str) -> PathBuf {
        self.file(fixture, &self.reference_suffix)
    }

    fn file(&self, fixture: &str, suffix: &str) -> PathBuf {
        self.dir.join(format!("{fixture}{suffix}"))
    }
}

/// Bounded wait for the application to report ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettlePolicy {
    /// Give up after this long
    pub timeout_ms: u64,
    /// Delay between readiness checks
    pub poll_interval_ms: u64,
}

impl Default for SettlePolicy {
    fn default() -> Self {
        Self::with_timeout_ms(500)
    }
}

impl SettlePolicy {
    /// Create policy with timeout and the default poll interval
    #[inline]
    #[must_use]
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            poll_interval_ms: 10,
        }
    }

    /// Get timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Get poll interval
    #[inline]
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }
}

/// Harness configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Fixture file layout
    pub assets: AssetLayout,
    /// Root of the submission scanned for imports
    pub scan_root: PathBuf,
    /// Import whitelist policy
    pub imports: ImportPolicy,
    /// Allowed per-channel difference
    pub tolerance: u8,
    /// Readiness wait before loading a scene
    pub scene_settle: SettlePolicy,
    /// Readiness wait before building a manipulation scenario
    pub manip_settle: SettlePolicy,
    /// Shape created for manipulation scenarios
    pub shape: ShapeKind,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            assets: AssetLayout::default(),
            scan_root: PathBuf::from("."),
            imports: ImportPolicy::default(),
            tolerance: DEFAULT_CHANNEL_TOLERANCE,
            scene_settle: SettlePolicy::with_timeout_ms(500),
            manip_settle: SettlePolicy::with_timeout_ms(1000),
            shape: ShapeKind::Cube,
        }
    }
}

impl HarnessConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// With asset directory
    #[inline]
    #[must_use]
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets.dir = dir.into();
        self
    }

    /// With scan root
    #[inline]
    #[must_use]
    pub fn with_scan_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scan_root = root.into();
        self
    }

    /// With import policy
    #[inline]
    #[must_use]
    pub fn with_imports(mut self, imports: ImportPolicy) -> Self {
        self.imports = imports;
        self
    }

    /// With channel tolerance
    #[inline]
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// With both settle policies
    #[inline]
    #[must_use]
    pub fn with_settle(mut self, scene: SettlePolicy, manip: SettlePolicy) -> Self {
        self.scene_settle = scene;
        self.manip_settle = manip;
        self
    }
}
