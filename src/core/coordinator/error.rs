//=========================================================================
// Coordinator Errors
//=========================================================================
//
// Fatal conditions. Any of these means the host loop cannot continue.
// Recoverable transition failures are events, not errors (see event.rs).
//
//=========================================================================

use thiserror::Error;

use crate::core::objects::RegistryError;
use crate::core::view::ViewError;

/// Fatal coordinator failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    /// `start()` was called more than once.
    #[error("coordinator already started")]
    AlreadyStarted,

    /// `on_tick()` or `on_render()` was called with no active view.
    #[error("no view is active; start() has not completed")]
    NotStarted,

    /// `start()` ran without an initial view configured.
    #[error("no initial view configured")]
    NoInitialView,

    /// Pre-spawn object setup failed during `start()`.
    #[error("pre-spawn setup failed")]
    Prespawn(#[source] RegistryError),

    /// The initial view refused to enter during `start()`.
    #[error("initial view {view} failed to enter")]
    InitialViewFailed {
        view: String,
        #[source]
        source: ViewError,
    },
}
