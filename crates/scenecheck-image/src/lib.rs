//! Rendered-image verification
//!
//! Compares a produced image against a stored reference: dimensions first,
//! then every pixel channel with a small absolute tolerance. All pixels are
//! visited so one run reports every mismatch.
//!
//! # Example
//!
//! ```rust,ignore
//! use scenecheck_image::{compare_images, load_reference, DEFAULT_CHANNEL_TOLERANCE};
//!
//! let reference = load_reference(Path::new("scenes/box.correct.png"))?;
//! let report = compare_images(&reference, &produced, DEFAULT_CHANNEL_TOLERANCE)?;
//! report.ensure_match()?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod compare;
pub mod error;
pub mod files;
pub mod pixel;

pub use compare::{compare_images, ChannelMismatch, ComparisonReport, DEFAULT_CHANNEL_TOLERANCE};
pub use error::CompareError;
pub use files::{load_reference, save_png, solid_image};
pub use pixel::{Channel, PackedRgb};

/// Re-export of the image buffer type used throughout
pub use image::RgbaImage;
