//=========================================================================
// Coordinator Builder
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::FrameCoordinator;
use crate::core::alert::{alert_channel, AlertReceiver};
use crate::core::objects::{ArenaObjectFactory, ObjectFactory, ObjectRegistry};
use crate::core::startup::StartupSequencer;
use crate::core::view::View;

//=== CoordinatorBuilder ==================================================

/// Builder for a [`FrameCoordinator`] and its alert receiver.
///
/// # Default Values
///
/// - **User id**: 0
/// - **Alert capacity**: 64
/// - **Pre-spawn set**: the registry default,
///   [`DEFAULT_PRESPAWN`](crate::core::objects::DEFAULT_PRESPAWN)
/// - **Object factory**: [`ArenaObjectFactory::default`]
///
/// # Examples
///
/// ```rust
/// # use aetheric_views::prelude::*;
/// # struct Menu;
/// # impl View for Menu {
/// #     fn enter(&mut self, _ctx: &mut ViewContext) -> Result<(), ViewError> { Ok(()) }
/// #     fn tick(&mut self, _ctx: &mut ViewContext) {}
/// #     fn render(&self, _ctx: &RenderContext) {}
/// # }
/// let (mut coordinator, alerts) = CoordinatorBuilder::new()
///     .with_user_id(42)
///     .with_initial_view(Menu)
///     .build();
///
/// coordinator.start().unwrap();
/// coordinator.on_tick().unwrap();
/// coordinator.on_render().unwrap();
/// assert_eq!(alerts.pending(), 0);
/// ```
pub struct CoordinatorBuilder {
    user_id: u64,
    alert_capacity: usize,
    prespawn: Option<Vec<String>>,
    factory: Option<Box<dyn ObjectFactory>>,
    startup: StartupSequencer,
}

impl CoordinatorBuilder {
    /// Default number of undelivered alerts kept before dropping.
    pub const DEFAULT_ALERT_CAPACITY: usize = 64;

    pub fn new() -> Self {
        Self {
            user_id: 0,
            alert_capacity: Self::DEFAULT_ALERT_CAPACITY,
            prespawn: None,
            factory: None,
            startup: StartupSequencer::new(),
        }
    }

    /// Sets the opaque session identifier.
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets how many alerts may wait for delivery.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_alert_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Alert capacity must be positive");
        self.alert_capacity = capacity;
        self
    }

    /// Replaces the set of objects created before the player spawns.
    pub fn with_prespawn<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.prespawn = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Uses `factory` as the object system.
    pub fn with_object_factory<F>(mut self, factory: F) -> Self
    where
        F: ObjectFactory + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Sets the view activated by `start()`.
    pub fn with_initial_view<V>(mut self, view: V) -> Self
    where
        V: View + 'static,
    {
        self.startup = self.startup.with_initial_view(view);
        self
    }

    /// Replaces the whole startup sequence.
    pub fn with_startup(mut self, startup: StartupSequencer) -> Self {
        self.startup = startup;
        self
    }

    /// Builds the coordinator in its uninitialized state.
    pub fn build(self) -> (FrameCoordinator, AlertReceiver) {
        debug!(
            "Building coordinator (user: {}, alerts: {}, custom prespawn: {})",
            self.user_id,
            self.alert_capacity,
            self.prespawn.is_some()
        );

        let factory = self
            .factory
            .unwrap_or_else(|| Box::new(ArenaObjectFactory::default()));
        let mut objects = ObjectRegistry::new(factory);
        if let Some(names) = self.prespawn {
            objects = objects.with_prespawn(names);
        }
        let (alerts, receiver) = alert_channel(self.alert_capacity);

        let coordinator = FrameCoordinator::new(objects, alerts, self.startup, self.user_id);
        (coordinator, receiver)
    }
}

impl Default for CoordinatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
