//=========================================================================
// Core Systems
//
// Everything the frame coordinator needs to run a game's views.
//
// Responsibilities:
// - Own the active view and sequence tick/render (`coordinator`)
// - Define the view capability and its contexts (`view`)
// - Keep long-lived object handles across transitions (`objects`)
// - Deliver user-facing alerts without blocking (`alert`)
// - Run the one-time startup path (`startup`)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod alert;
pub mod coordinator;
pub mod objects;
pub mod startup;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

//=== Re-exports ==========================================================

pub use alert::{Alert, AlertChannel, AlertReceiver, AlertSink, LogAlertSink};
pub use coordinator::{CoordinatorBuilder, CoordinatorError, CoordinatorEvent, FrameCoordinator};
pub use objects::{ObjectFactory, ObjectHandle, ObjectRegistry};
pub use startup::StartupSequencer;
pub use view::{RenderContext, View, ViewContext, ViewError};
