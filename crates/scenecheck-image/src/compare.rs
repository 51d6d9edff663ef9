//! Per-pixel, per-channel tolerance comparison
//!
//! Channel differences up to the tolerance absorb rounding and gamma noise
//! between the renderer and the tool that produced the reference.

use crate::error::CompareError;
use crate::pixel::{Channel, PackedRgb};
use image::RgbaImage;
use std::collections::BTreeSet;
use std::fmt;

/// Allowed absolute difference per channel
pub const DEFAULT_CHANNEL_TOLERANCE: u8 = 1;

/// One channel of one pixel outside tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMismatch {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Offending channel
    pub channel: Channel,
    /// Reference pixel
    pub expected: PackedRgb,
    /// Produced pixel
    pub actual: PackedRgb,
}

impl ChannelMismatch {
    /// Absolute difference on the offending channel
    #[inline]
    #[must_use]
    pub fn difference(&self) -> u8 {
        self.expected
            .channel(self.channel)
            .abs_diff(self.actual.channel(self.channel))
    }
}

impl fmt::Display for ChannelMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Image(x={}, y={}) has the wrong {} value; expected{} actual{}",
            self.x, self.y, self.channel, self.expected, self.actual
        )
    }
}

/// Result of comparing two equally sized images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Image width
    pub width: u32,
    /// Image height
    pub height: u32,
    /// Tolerance used
    pub tolerance: u8,
    /// Every channel outside tolerance, in row-major order
    pub mismatches: Vec<ChannelMismatch>,
}

impl ComparisonReport {
    /// Check if every channel was within tolerance
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Number of distinct pixels with at least one bad channel
    #[must_use]
    pub fn mismatched_pixels(&self) -> usize {
        self.mismatches
            .iter()
            .map(|m| (m.y, m.x))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Turn a non-matching report into an error
    pub fn ensure_match(self) -> Result<Self, CompareError> {
        if self.is_match() {
            Ok(self)
        } else {
            Err(CompareError::PixelMismatch(self))
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return write!(
                f,
                "{}x{} image matches within tolerance {}",
                self.width, self.height, self.tolerance
            );
        }
        write!(
            f,
            "{} channel mismatch(es) across {} pixel(s) of {}x{} (tolerance {})",
            self.mismatches.len(),
            self.mismatched_pixels(),
            self.width,
            self.height,
            self.tolerance
        )?;
        for mismatch in &self.mismatches {
            write!(f, "\n  {mismatch}")?;
        }
        Ok(())
    }
}

/// Compare `produced` against `reference`
///
/// Dimensions are checked first. On a size mismatch no pixel is examined.
/// Otherwise every pixel is visited, so the report lists all mismatches.
pub fn compare_images(
    reference: &RgbaImage,
    produced: &RgbaImage,
    tolerance: u8,
) -> Result<ComparisonReport, CompareError> {
    if reference.dimensions() != produced.dimensions() {
        return Err(CompareError::dimensions(
            reference.dimensions(),
            produced.dimensions(),
        ));
    }

    let (width, height) = reference.dimensions();
    let mut mismatches = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let expected = PackedRgb::from_rgba(*reference.get_pixel(x, y));
            let actual = PackedRgb::from_rgba(*produced.get_pixel(x, y));
            for channel in Channel::ALL {
                if expected.channel(channel).abs_diff(actual.channel(channel)) > tolerance {
                    let mismatch = ChannelMismatch {
                        x,
                        y,
                        channel,
                        expected,
                        actual,
                    };
                    tracing::debug!("{mismatch}");
                    mismatches.push(mismatch);
                }
            }
        }
    }

    if !mismatches.is_empty() {
        tracing::warn!(width, height, count = mismatches.len(), "image differs from reference");
    }

    Ok(ComparisonReport {
        width,
        height,
        tolerance,
        mismatches,
    })
}
