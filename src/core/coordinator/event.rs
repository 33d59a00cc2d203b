//=========================================================================
// Coordinator Events
//=========================================================================
//
// Record of what happened at tick boundaries. The host drains these with
// FrameCoordinator::take_events() to log them or raise alerts.
//
//=========================================================================

use crate::core::view::ViewError;

/// Outcome of applying a pending transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinatorEvent {
    /// `to` entered and replaced `from`.
    TransitionApplied { from: String, to: String, frame: u64 },

    /// `to` failed to enter; `from` is still current.
    TransitionFailed {
        from: String,
        to: String,
        frame: u64,
        error: ViewError,
    },
}

impl CoordinatorEvent {
    /// Whether this event reports a rolled-back transition.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::TransitionFailed { .. })
    }
}
