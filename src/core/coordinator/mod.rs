//=========================================================================
// Frame Coordinator
//=========================================================================
//
// Owns the current view and sequences every frame.
//
// Architecture:
//   FrameCoordinator
//     ├─ current: Option<Box<dyn View>>   (None until start())
//     ├─ pending: TransitionSlot          (at most one, last writer wins)
//     ├─ objects: ObjectRegistry          (outlives every view)
//     └─ alerts:  AlertChannel
//
// Frame:
//   on_tick()   → apply pending transition → current.tick()
//   on_render() → current.render()
//
// Transition at the tick boundary:
//   incoming.enter() ── Err ──► drop incoming, keep current (never exited)
//          │
//          Ok
//          ▼
//   swap current ──► outgoing.exit() (errors absorbed) ──► drop outgoing
//
//=========================================================================

//=== Module Declarations =================================================

mod builder;
mod error;
mod event;

//=== Public API ==========================================================

pub use builder::CoordinatorBuilder;
pub use error::CoordinatorError;
pub use event::CoordinatorEvent;

//=== External Dependencies ===============================================

use std::collections::VecDeque;

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::alert::AlertChannel;
use crate::core::objects::{ObjectRegistry, RegistryError};
use crate::core::startup::StartupSequencer;
use crate::core::view::{RenderContext, TransitionSlot, View, ViewContext};

//=== Constants ===========================================================

/// Events kept for [`FrameCoordinator::take_events`] before the oldest
/// are discarded.
pub const MAX_BUFFERED_EVENTS: usize = 256;

//=== FrameCoordinator ====================================================

/// Single owner of the active view and the frame lifecycle.
///
/// Construct one through [`CoordinatorBuilder`] and hand it to the host
/// loop by `&mut`. The host calls [`Self::start`] once, then
/// [`Self::on_tick`] and [`Self::on_render`] every frame.
pub struct FrameCoordinator {
    current: Option<Box<dyn View>>,
    pending: TransitionSlot,
    objects: ObjectRegistry,
    alerts: AlertChannel,
    startup: Option<StartupSequencer>,
    user_id: u64,
    frame: u64,
    events: VecDeque<CoordinatorEvent>,
}

impl FrameCoordinator {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        objects: ObjectRegistry,
        alerts: AlertChannel,
        startup: StartupSequencer,
        user_id: u64,
    ) -> Self {
        Self {
            current: None,
            pending: TransitionSlot::new(),
            objects,
            alerts,
            startup: Some(startup),
            user_id,
            frame: 0,
            events: VecDeque::new(),
        }
    }

    //--- Startup ----------------------------------------------------------

    /// Runs pre-spawn setup and activates the initial view.
    ///
    /// # Errors
    ///
    /// All errors are fatal. A second call returns
    /// [`CoordinatorError::AlreadyStarted`] and leaves the coordinator
    /// untouched.
    pub fn start(&mut self) -> Result<(), CoordinatorError> {
        let Some(startup) = self.startup.take() else {
            error!("start() called more than once");
            return Err(CoordinatorError::AlreadyStarted);
        };

        info!("Starting coordinator (user: {})", self.user_id);

        let started = {
            let mut ctx = self.context();
            startup.run(&mut ctx)
        };

        match started {
            Ok(view) => {
                self.current = Some(view);
                Ok(())
            }
            Err(e) => {
                // Requests made by a failed initial enter() go with it.
                self.pending.clear();
                Err(e)
            }
        }
    }

    /// Whether an initial view has been entered.
    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    //--- Transitions ------------------------------------------------------

    /// Requests that `view` become current at the next tick boundary.
    ///
    /// Overwrites any earlier request made since the last tick. The
    /// overwritten view is dropped immediately without `exit()`.
    pub fn transition_to<V>(&mut self, view: V)
    where
        V: View + 'static,
    {
        self.pending.request(Box::new(view));
    }

    /// Same as [`Self::transition_to`] for an already boxed view.
    pub fn transition_to_boxed(&mut self, view: Box<dyn View>) {
        self.pending.request(view);
    }

    /// Whether a transition is waiting for the next tick.
    pub fn has_pending_transition(&self) -> bool {
        self.pending.is_pending()
    }

    //--- Frame Loop -------------------------------------------------------

    /// Applies the pending transition, then ticks the current view.
    ///
    /// A failed transition is rolled back and recorded as a
    /// [`CoordinatorEvent::TransitionFailed`]; it is never returned.
    /// Hosts should drain events with [`Self::take_events`]; at most
    /// [`MAX_BUFFERED_EVENTS`] are kept, oldest dropped first.
    ///
    /// # Errors
    ///
    /// [`CoordinatorError::NotStarted`] if no view is active (fatal).
    pub fn on_tick(&mut self) -> Result<(), CoordinatorError> {
        if self.current.is_none() {
            error!("on_tick() called before start()");
            return Err(CoordinatorError::NotStarted);
        }

        self.frame += 1;
        self.apply_pending_transition();

        let Self {
            current,
            pending,
            objects,
            alerts,
            user_id,
            frame,
            ..
        } = self;
        let Some(view) = current.as_mut() else {
            return Err(CoordinatorError::NotStarted);
        };

        let mut ctx = ViewContext::new(objects, pending, alerts, *user_id, *frame);
        view.tick(&mut ctx);
        Ok(())
    }

    /// Renders the current view. Never applies transitions.
    ///
    /// # Errors
    ///
    /// [`CoordinatorError::NotStarted`] if no view is active (fatal).
    pub fn on_render(&self) -> Result<(), CoordinatorError> {
        let Some(view) = self.current.as_ref() else {
            error!("on_render() called before start()");
            return Err(CoordinatorError::NotStarted);
        };

        let ctx = RenderContext::new(&self.objects, &self.alerts, self.user_id, self.frame);
        view.render(&ctx);
        Ok(())
    }

    //--- Objects & Alerts -------------------------------------------------

    /// Makes sure the pre-spawn objects exist before the player spawns.
    ///
    /// Only the first successful call creates anything.
    pub fn before_player_spawn(&mut self) -> Result<(), RegistryError> {
        if self.objects.ensure_prespawned()? {
            debug!("Pre-spawn objects ready before player spawn");
        }
        Ok(())
    }

    /// Queues a user-facing alert. Never blocks, never fails.
    pub fn alert(&self, message: impl Into<String>) {
        self.alerts.notify(message);
    }

    /// A sender for alerts, for collaborators outside the frame loop.
    pub fn alert_channel(&self) -> AlertChannel {
        self.alerts.clone()
    }

    pub fn objects(&self) -> &ObjectRegistry {
        &self.objects
    }

    //--- Queries ----------------------------------------------------------

    /// Name of the current view.
    pub fn current_view_name(&self) -> Option<&str> {
        self.current.as_deref().map(|view| view.name())
    }

    /// Number of ticks run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    pub fn set_user_id(&mut self, user_id: u64) {
        self.user_id = user_id;
    }

    /// Takes the events recorded since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<CoordinatorEvent> {
        self.events.drain(..).collect()
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_pending_transition(&mut self) {
        let Some(mut incoming) = self.pending.take() else {
            return;
        };

        let from = self
            .current
            .as_deref()
            .map(|view| view.name().to_string())
            .unwrap_or_default();
        let to = incoming.name().to_string();
        let frame = self.frame;

        debug!("Applying transition {} -> {} (frame {})", from, to, frame);

        let entered = {
            let mut ctx = self.context();
            incoming.enter(&mut ctx)
        };

        if let Err(error) = entered {
            warn!("Transition {} -> {} rolled back: {}", from, to, error);
            drop(incoming);
            // Requests made by the failed enter() go with it.
            self.pending.clear();
            self.record(CoordinatorEvent::TransitionFailed {
                from,
                to,
                frame,
                error,
            });
            return;
        }

        if let Some(mut outgoing) = self.current.replace(incoming) {
            let mut ctx = self.context();
            if let Err(e) = outgoing.exit(&mut ctx) {
                warn!("View {} failed to exit cleanly: {}", from, e);
            }
        }

        self.record(CoordinatorEvent::TransitionApplied { from, to, frame });
    }

    fn record(&mut self, event: CoordinatorEvent) {
        if self.events.len() == MAX_BUFFERED_EVENTS {
            if let Some(oldest) = self.events.pop_front() {
                debug!("Event buffer full, dropping {:?}", oldest);
            }
        }
        self.events.push_back(event);
    }

    fn context(&mut self) -> ViewContext<'_> {
        ViewContext::new(
            &mut self.objects,
            &mut self.pending,
            &self.alerts,
            self.user_id,
            self.frame,
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
