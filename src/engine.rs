//=========================================================================
// Aetheric Engine
//
// Host loop around the frame coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Platform loop]
//         │                          │                    │
//         ├─ with_tps()              ├─ start()           └─ step() per frame
//         ├─ with_initial_view()     ├─ step()
//         └─ with_alert_sink()       └─ run_frames()
// ```
//
// One step = coordinator tick → coordinator render → deliver alerts →
// report coordinator events.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::alert::{AlertReceiver, AlertSink, LogAlertSink};
use crate::core::coordinator::{CoordinatorBuilder, CoordinatorError, CoordinatorEvent, FrameCoordinator};
use crate::core::objects::ObjectFactory;
use crate::core::view::View;
use crate::platform::{Platform, PlatformError};

//=== EngineError =========================================================

/// Reasons the engine stopped.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The coordinator hit a fatal condition.
    #[error(transparent)]
    Coordinator(#[from] CoordinatorError),

    /// The windowing layer failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frames per second driven by the platform loop)
/// - **Window title**: "Aetheric Engine"
/// - **Alert sink**: [`LogAlertSink`]
/// - Coordinator defaults from [`CoordinatorBuilder`]
///
/// # Examples
///
/// ```no_run
/// # use aetheric_views::prelude::*;
/// # struct Menu;
/// # impl View for Menu {
/// #     fn enter(&mut self, _ctx: &mut ViewContext) -> Result<(), ViewError> { Ok(()) }
/// #     fn tick(&mut self, _ctx: &mut ViewContext) {}
/// #     fn render(&self, _ctx: &RenderContext) {}
/// # }
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_initial_view(Menu)
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct EngineBuilder {
    tps: f64,
    window_title: String,
    coordinator: CoordinatorBuilder,
    sink: Option<Box<dyn AlertSink>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            window_title: "Aetheric Engine".to_string(),
            coordinator: CoordinatorBuilder::new(),
            sink: None,
        }
    }

    /// Sets the target frames per second of the platform loop.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.coordinator = self.coordinator.with_user_id(user_id);
        self
    }

    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_alert_capacity(mut self, capacity: usize) -> Self {
        self.coordinator = self.coordinator.with_alert_capacity(capacity);
        self
    }

    pub fn with_prespawn<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.coordinator = self.coordinator.with_prespawn(names);
        self
    }

    pub fn with_object_factory<F>(mut self, factory: F) -> Self
    where
        F: ObjectFactory + 'static,
    {
        self.coordinator = self.coordinator.with_object_factory(factory);
        self
    }

    pub fn with_initial_view<V>(mut self, view: V) -> Self
    where
        V: View + 'static,
    {
        self.coordinator = self.coordinator.with_initial_view(view);
        self
    }

    /// Sets where alerts are displayed.
    pub fn with_alert_sink<K>(mut self, sink: K) -> Self
    where
        K: AlertSink + 'static,
    {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Builds the engine. The coordinator is not started yet.
    pub fn build(self) -> Engine {
        info!("Building engine (TPS: {})", self.tps);

        let (coordinator, alerts) = self.coordinator.build();
        Engine {
            coordinator,
            alerts,
            sink: self.sink.unwrap_or_else(|| Box::new(LogAlertSink)),
            tps: self.tps,
            window_title: self.window_title,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// A frame coordinator plus the host loop that drives it.
pub struct Engine {
    coordinator: FrameCoordinator,
    alerts: AlertReceiver,
    sink: Box<dyn AlertSink>,
    tps: f64,
    window_title: String,
}

impl Engine {
    //--- Lifecycle --------------------------------------------------------

    /// Starts the coordinator. See [`FrameCoordinator::start`].
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.coordinator.start()?;
        self.deliver_alerts();
        Ok(())
    }

    /// Runs one headless frame: tick, render, alerts, events.
    pub fn step(&mut self) -> Result<(), EngineError> {
        self.coordinator.on_tick()?;
        self.coordinator.on_render()?;
        self.deliver_alerts();
        self.report_events();
        Ok(())
    }

    /// Runs `frames` headless steps, starting the coordinator first if
    /// needed.
    pub fn run_frames(&mut self, frames: u64) -> Result<(), EngineError> {
        if !self.coordinator.is_started() {
            self.start()?;
        }

        for _ in 0..frames {
            self.step()?;
        }
        Ok(())
    }

    /// Starts the coordinator and runs the windowed loop until the window
    /// closes or a fatal error occurs.
    ///
    /// # Errors
    ///
    /// Returns the fatal coordinator error that stopped the loop, or a
    /// [`PlatformError`] if the event loop could not run.
    pub fn run(mut self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        if let Err(e) = self.start() {
            error!("Engine failed to start: {}", e);
            return Err(e);
        }

        let result = Platform::new(self).run();
        match &result {
            Ok(()) => info!("Engine shutdown complete"),
            Err(e) => error!("Engine stopped: {}", e),
        }
        result
    }

    //--- Accessors --------------------------------------------------------

    pub fn coordinator(&self) -> &FrameCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut FrameCoordinator {
        &mut self.coordinator
    }

    pub fn tps(&self) -> f64 {
        self.tps
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    //--- Internal Helpers -------------------------------------------------

    fn deliver_alerts(&mut self) {
        self.alerts.drain_into(&mut *self.sink);
    }

    fn report_events(&mut self) {
        for event in self.coordinator.take_events() {
            match event {
                CoordinatorEvent::TransitionApplied { from, to, frame } => {
                    debug!("Frame {}: {} -> {}", frame, from, to);
                }
                CoordinatorEvent::TransitionFailed {
                    from,
                    to,
                    frame,
                    error,
                } => {
                    warn!("Frame {}: stayed on {}, {} failed: {}", frame, from, to, error);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
