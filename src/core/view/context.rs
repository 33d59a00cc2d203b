//=========================================================================
// View Contexts
//=========================================================================
//
// What a view can reach during its callbacks.
//
// - ViewContext (enter/exit/tick): object registry, transition slot,
//   alerts, session data.
// - RenderContext (render): read-only registry, alerts, session data.
//   There is no transition API here, so a view cannot change the current
//   view while it is being drawn.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{TransitionSlot, View};
use crate::core::alert::AlertChannel;
use crate::core::objects::{ObjectHandle, ObjectRegistry, RegistryError};

//=== ViewContext =========================================================

/// Mutable context passed to `enter`, `exit` and `tick`.
pub struct ViewContext<'a> {
    objects: &'a mut ObjectRegistry,
    transitions: &'a mut TransitionSlot,
    alerts: &'a AlertChannel,
    user_id: u64,
    frame: u64,
}

impl<'a> ViewContext<'a> {
    pub(crate) fn new(
        objects: &'a mut ObjectRegistry,
        transitions: &'a mut TransitionSlot,
        alerts: &'a AlertChannel,
        user_id: u64,
        frame: u64,
    ) -> Self {
        Self {
            objects,
            transitions,
            alerts,
            user_id,
            frame,
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Requests that `view` become current at the next tick boundary.
    ///
    /// Replaces any transition requested earlier in the same frame.
    pub fn transition_to<V>(&mut self, view: V)
    where
        V: View + 'static,
    {
        self.transitions.request(Box::new(view));
    }

    /// Same as [`Self::transition_to`] for an already boxed view.
    pub fn transition_to_boxed(&mut self, view: Box<dyn View>) {
        self.transitions.request(view);
    }

    /// Whether a transition is queued for the next tick.
    pub fn has_pending_transition(&self) -> bool {
        self.transitions.is_pending()
    }

    //--- Objects ----------------------------------------------------------

    pub fn objects(&self) -> &ObjectRegistry {
        &*self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectRegistry {
        &mut *self.objects
    }

    /// Shorthand for [`ObjectRegistry::create_or_get`].
    pub fn create_or_get(&mut self, name: &str) -> Result<ObjectHandle, RegistryError> {
        self.objects.create_or_get(name)
    }

    /// Makes sure the pre-spawn objects exist before the player spawns.
    ///
    /// Idempotent.
    pub fn before_player_spawn(&mut self) -> Result<(), RegistryError> {
        self.objects.ensure_prespawned().map(|_| ())
    }

    //--- Session ----------------------------------------------------------

    /// Queues a user-facing alert. Never fails.
    pub fn alert(&self, message: impl Into<String>) {
        self.alerts.notify(message);
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Index of the current tick, starting at 1. Zero during startup.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

//=== RenderContext =======================================================

/// Read-only context passed to `render`.
pub struct RenderContext<'a> {
    objects: &'a ObjectRegistry,
    alerts: &'a AlertChannel,
    user_id: u64,
    frame: u64,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(
        objects: &'a ObjectRegistry,
        alerts: &'a AlertChannel,
        user_id: u64,
        frame: u64,
    ) -> Self {
        Self {
            objects,
            alerts,
            user_id,
            frame,
        }
    }

    pub fn objects(&self) -> &ObjectRegistry {
        self.objects
    }

    /// Queues a user-facing alert. Never fails.
    pub fn alert(&self, message: impl Into<String>) {
        self.alerts.notify(message);
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
