//=========================================================================
// Startup Sequencer
//=========================================================================
//
// One-time initialization path run by FrameCoordinator::start().
//
// Sequence:
//   1. Pre-spawn the placeholder objects (registry)
//   2. Enter the initial view
//
// The sequencer is consumed by the run, so the coordinator can only
// ever start once.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::coordinator::CoordinatorError;
use crate::core::view::{View, ViewContext};

//=== StartupSequencer ====================================================

/// Holds the first view until the coordinator starts.
#[derive(Default)]
pub struct StartupSequencer {
    initial_view: Option<Box<dyn View>>,
}

impl StartupSequencer {
    pub fn new() -> Self {
        Self { initial_view: None }
    }

    /// Sets the view activated by `start()`.
    pub fn with_initial_view<V>(mut self, view: V) -> Self
    where
        V: View + 'static,
    {
        self.initial_view = Some(Box::new(view));
        self
    }

    /// Same as [`Self::with_initial_view`] for an already boxed view.
    pub fn with_initial_view_boxed(mut self, view: Box<dyn View>) -> Self {
        self.initial_view = Some(view);
        self
    }

    pub fn has_initial_view(&self) -> bool {
        self.initial_view.is_some()
    }

    /// Runs pre-spawn setup and enters the initial view.
    ///
    /// Returns the entered view for the coordinator to make current.
    pub(crate) fn run(self, ctx: &mut ViewContext) -> Result<Box<dyn View>, CoordinatorError> {
        let Some(mut view) = self.initial_view else {
            error!("Startup aborted: no initial view configured");
            return Err(CoordinatorError::NoInitialView);
        };

        if let Err(e) = ctx.objects_mut().ensure_prespawned() {
            error!("Startup aborted: pre-spawn failed: {}", e);
            return Err(CoordinatorError::Prespawn(e));
        }

        if let Err(source) = view.enter(ctx) {
            error!("Startup aborted: initial view {} failed to enter: {}", view.name(), source);
            return Err(CoordinatorError::InitialViewFailed {
                view: view.name().to_string(),
                source,
            });
        }

        info!("Initial view {} entered", view.name());
        Ok(view)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
