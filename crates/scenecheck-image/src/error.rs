//! Error types for image comparison

use crate::compare::ComparisonReport;
use std::path::PathBuf;

/// Errors comparing a produced image against its reference
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// Width or height differ; no pixels were compared
    #[error(
        "image has the wrong size: expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        /// Reference width
        expected_width: u32,
        /// Reference height
        expected_height: u32,
        /// Produced width
        actual_width: u32,
        /// Produced height
        actual_height: u32,
    },

    /// One or more channels exceeded the tolerance
    #[error("{0}")]
    PixelMismatch(ComparisonReport),

    /// Reference image could not be read or decoded
    #[error("failed to load reference image {}: {source}", .path.display())]
    ReferenceLoad {
        /// Reference path
        path: PathBuf,
        /// Decode or I/O error
        #[source]
        source: image::ImageError,
    },
}

impl CompareError {
    /// Create dimension mismatch error
    #[must_use]
    pub fn dimensions(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        }
    }

    /// Get the pixel report, if this is a pixel mismatch
    #[inline]
    #[must_use]
    pub fn report(&self) -> Option<&ComparisonReport> {
        match self {
            Self::PixelMismatch(report) => Some(report),
            _ => None,
        }
    }
}
