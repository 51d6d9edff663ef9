//! Manipulation scenario builder
//!
//! Builds a one-shape scene, attaches a manipulator, primes it and applies a
//! single drag. The harness never touches the resulting transformation; the
//! caller inspects whatever the manipulator produced.

use crate::app::{Application, ApplicationLauncher, LaunchOptions, Manipulator, ManipulatorKind, ShapeKind};
use crate::config::SettlePolicy;
use crate::error::{AppError, HarnessError};
use crate::lifecycle::{ManipulatorLifecycle, ManipulatorState};
use crate::settle::wait_until_ready;
use kurbo::Vec2;

/// What to drag, and how
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManipulationRequest {
    /// Manipulator variant
    pub kind: ManipulatorKind,
    /// Picked axis index, passed through unchanged
    pub axis: usize,
    /// Pointer position at pick time
    pub position: Vec2,
    /// Pointer movement
    pub delta: Vec2,
}

impl ManipulationRequest {
    /// Create request
    #[inline]
    #[must_use]
    pub fn new(kind: ManipulatorKind, axis: usize, position: Vec2, delta: Vec2) -> Self {
        Self {
            kind,
            axis,
            position,
            delta,
        }
    }
}

/// Live application after a scripted drag
pub struct ManipulationScenario<A: Application> {
    app: A,
    transformation: A::Transformation,
    lifecycle: ManipulatorLifecycle,
}

impl<A: Application> ManipulationScenario<A> {
    /// Get application
    #[inline]
    pub fn app(&self) -> &A {
        &self.app
    }

    /// Get application mutably
    #[inline]
    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    /// Transformation of the scenario's shape
    #[inline]
    pub fn transformation(&self) -> &A::Transformation {
        &self.transformation
    }

    /// Lifecycle state reached
    #[inline]
    pub fn state(&self) -> ManipulatorState {
        self.lifecycle.state()
    }

    /// Take the application back
    #[inline]
    pub fn into_app(self) -> A {
        self.app
    }

    /// Close the application
    pub fn dispose(self) {
        self.app.dispose();
    }
}

impl<A> std::fmt::Debug for ManipulationScenario<A>
where
    A: Application + std::fmt::Debug,
    A::Transformation: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManipulationScenario")
            .field("app", &self.app)
            .field("transformation", &self.transformation)
            .field("state", &self.lifecycle.state())
            .finish()
    }
}

/// Launch an application and run one manipulation on a fresh shape
///
/// Manipulator construction failures are returned, not swallowed. If any
/// step fails the application is disposed before the error is returned.
pub fn setup_manipulation<L: ApplicationLauncher>(
    launcher: &L,
    request: &ManipulationRequest,
    shape: ShapeKind,
    settle: &SettlePolicy,
) -> Result<ManipulationScenario<L::App>, HarnessError> {
    tracing::info!(kind = %request.kind, axis = request.axis, %shape, "building manipulation scenario");
    let mut app = launcher.launch(LaunchOptions { interactive: false })?;

    match drive(&mut app, request, shape, settle) {
        Ok((transformation, lifecycle)) => Ok(ManipulationScenario {
            app,
            transformation,
            lifecycle,
        }),
        Err(err) => {
            tracing::error!(error = %err, "manipulation scenario failed");
            app.dispose();
            Err(err)
        }
    }
}

fn drive<A: Application>(
    app: &mut A,
    request: &ManipulationRequest,
    shape: ShapeKind,
    settle: &SettlePolicy,
) -> Result<(A::Transformation, ManipulatorLifecycle), HarnessError> {
    app.set_visible(true);
    wait_until_ready(app, settle)?;

    let transformation = app.add_shape(shape)?;
    let mut manipulator = app.new_manipulator(request.kind)?;
    let mut lifecycle = ManipulatorLifecycle::new();

    manipulator.set_transformation(transformation.clone());
    lifecycle.advance(ManipulatorState::Bound)?;
    app.set_current_manipulator(manipulator);
    app.refresh();

    let camera = app.view_camera();
    let manipulator = app
        .current_manipulator_mut()
        .ok_or(AppError::NoManipulator)?;
    manipulator.set_picked_info(request.axis, &camera, request.position);
    lifecycle.advance(ManipulatorState::Primed)?;

    manipulator.dragged(request.position, request.delta);
    lifecycle.advance(ManipulatorState::Dragged)?;
    app.refresh();

    Ok((transformation, lifecycle))
}
