//! Manipulator lifecycle state machine
//!
//! `Unbound → Bound → Primed → Dragged`. Every step happens once; there is no
//! way back. A new scenario needs a new manipulator.

use crate::error::LifecycleError;

/// Lifecycle state of a scenario's manipulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ManipulatorState {
    /// Constructed, no transformation yet
    #[default]
    Unbound,
    /// Bound to a transformation
    Bound,
    /// Axis, camera and pointer origin picked
    Primed,
    /// Drag delta applied
    Dragged,
}

/// States reachable from `from` in one step
#[must_use]
pub fn allowed_transitions(from: ManipulatorState) -> &'static [ManipulatorState] {
    use ManipulatorState::*;
    match from {
        Unbound => &[Bound],
        Bound => &[Primed],
        Primed => &[Dragged],
        Dragged => &[],
    }
}

/// Validates a lifecycle transition
pub fn validate_transition(
    from: ManipulatorState,
    to: ManipulatorState,
) -> Result<(), LifecycleError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(LifecycleError::IllegalTransition { from, to })
    }
}

/// Tracks one manipulator through its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManipulatorLifecycle {
    state: ManipulatorState,
}

impl ManipulatorLifecycle {
    /// Start in `Unbound`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> ManipulatorState {
        self.state
    }

    /// Move to `to`, rejecting anything outside the matrix
    pub fn advance(&mut self, to: ManipulatorState) -> Result<(), LifecycleError> {
        validate_transition(self.state, to)?;
        tracing::trace!(from = ?self.state, ?to, "manipulator transition");
        self.state = to;
        Ok(())
    }
}
