//! Grading harness for a student-built 3-D modeler
//!
//! Ties the import gate and the image comparator to a running application.
//!
//! # Core Operations
//!
//! - **Scene regression**: gate on import compliance, load `<T>.xml`, render
//!   `<T>.png`, compare against `<T>.correct.png`
//! - **Manipulation scenario**: add a cube, attach a manipulator, prime it
//!   and apply one drag, then hand the live application back
//!
//! # Architecture
//!
//! ```text
//! GradingContext ─┬─ ImportGate (memoized verdict)
//!                 ├─ runner::run_scene ── Application ── verify::compare_rendered
//!                 └─ scenario::setup_manipulation ── Application + Manipulator
//! ```
//!
//! The modeler itself is reached only through the [`Application`],
//! [`Manipulator`] and [`ApplicationLauncher`] traits.
//!
//! # Example
//!
//! ```rust,ignore
//! use scenecheck_harness::{GradingContext, HarnessConfig};
//!
//! let ctx = GradingContext::new(HarnessConfig::default())?;
//! ctx.assert_scene(&launcher, "box");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod runner;
pub mod scenario;
pub mod settle;
pub mod verify;

pub use app::{
    Application, ApplicationLauncher, LaunchOptions, Manipulator, ManipulatorKind, ShapeKind,
};
pub use config::{AssetLayout, HarnessConfig, SettlePolicy};
pub use context::GradingContext;
pub use error::{AppError, ConfigError, HarnessError, LifecycleError};
pub use lifecycle::{ManipulatorLifecycle, ManipulatorState};
pub use scenario::{ManipulationRequest, ManipulationScenario};

/// Pointer positions and deltas
pub use kurbo::Vec2;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
