//! Error types for the grading harness
//!
//! Every fatal condition surfaces as a [`HarnessError`]. Nothing is retried.

use crate::app::{ManipulatorKind, ShapeKind};
use crate::lifecycle::ManipulatorState;
use scenecheck_image::CompareError;
use scenecheck_imports::{PolicyError, ScanFailure};
use std::path::PathBuf;
use std::time::Duration;

/// Errors reported by the application collaborator
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Application could not be started
    #[error("failed to launch application: {0}")]
    Launch(String),

    /// Scene description could not be loaded
    #[error("failed to load scene {}: {message}", .path.display())]
    SceneLoad {
        /// Scene path
        path: PathBuf,
        /// Collaborator message
        message: String,
    },

    /// Current view could not be rendered or written
    #[error("failed to render to {}: {message}", .path.display())]
    Render {
        /// Output path
        path: PathBuf,
        /// Collaborator message
        message: String,
    },

    /// Shape could not be added to the scene
    #[error("failed to add {kind} shape: {message}")]
    Shape {
        /// Requested shape
        kind: ShapeKind,
        /// Collaborator message
        message: String,
    },

    /// Manipulator could not be instantiated
    #[error("failed to construct {kind} manipulator: {message}")]
    ManipulatorConstruction {
        /// Requested manipulator
        kind: ManipulatorKind,
        /// Collaborator message
        message: String,
    },

    /// Application has no current manipulator
    #[error("no manipulator is installed")]
    NoManipulator,
}

impl AppError {
    /// Create scene load error
    pub fn scene_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SceneLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create render error
    pub fn render(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Render {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Illegal manipulator lifecycle step
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    /// Transition not in the allowed matrix
    #[error("illegal manipulator transition {from:?} -> {to:?}")]
    IllegalTransition {
        /// Current state
        from: ManipulatorState,
        /// Requested state
        to: ManipulatorState,
    },
}

/// Errors loading harness configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for the harness
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main harness error type
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Submission imports a namespace outside the whitelist, or could not be read
    #[error("import check failed: {0}")]
    Imports(#[from] ScanFailure),

    /// Import policy is invalid
    #[error("import policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Rendered image does not match its reference
    #[error("image check failed: {0}")]
    Compare(#[from] CompareError),

    /// Application collaborator failed
    #[error("application error: {0}")]
    Application(#[from] AppError),

    /// Application did not report ready in time
    #[error("application not ready after {}ms", .waited.as_millis())]
    NotReady {
        /// Time spent waiting
        waited: Duration,
    },

    /// Manipulator lifecycle violated
    #[error("lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HarnessError {
    /// Check if the run was stopped by the import gate
    #[inline]
    #[must_use]
    pub fn is_compliance_failure(&self) -> bool {
        matches!(self, Self::Imports(_))
    }

    /// Check if the rendered image differed from the reference
    #[inline]
    #[must_use]
    pub fn is_image_mismatch(&self) -> bool {
        matches!(
            self,
            Self::Compare(CompareError::DimensionMismatch { .. } | CompareError::PixelMismatch(_))
        )
    }
}
