//=========================================================================
// Platform Subsystem
//
// Drives the engine from a Winit event loop.
//
// Architecture:
// ```text
//  Main Thread
//  ┌─────────────────────────────────────┐
//  │  Winit Event Loop                   │
//  │   ├─ resumed()        → create window│
//  │   ├─ RedrawRequested  → frame due?   │
//  │   │                      └─ Engine::step()
//  │   │                           (tick → render → alerts)
//  │   └─ CloseRequested   → exit         │
//  └─────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: tick and render always run
//   back to back inside one callback, so render never sees a frame
//   whose tick has not finished
// - **Fixed pacing**: a step runs only once 1/TPS has elapsed since the
//   previous one; redraws in between are skipped
// - **Fatal errors stop the loop**: the error is kept and returned from
//   `run()` once Winit hands control back
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== External Crates =====================================================

use std::time::{Duration, Instant};

use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::engine::{Engine, EngineError};

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal - if the event loop can't be created, the engine
/// cannot run.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// Event loop execution error.
    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[error("window creation failed: {0}")]
    WindowCreation(String),
}

//=== Platform ============================================================

/// Window owner and frame pacer.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(engine)` - engine already started
/// 2. **Execution**: `platform.run()` - blocks in the event loop
/// 3. **Frames**: each due `RedrawRequested` runs one `Engine::step()`
/// 4. **Shutdown**: window closed or fatal error → loop exits → `run()` returns
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    engine: Engine,

    /// Minimum time between two steps.
    frame_interval: Duration,

    last_step: Option<Instant>,

    /// First fatal error seen inside the loop.
    failure: Option<EngineError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(engine: Engine) -> Self {
        let frame_interval = Duration::from_secs_f64(1.0 / engine.tps());
        info!(target: "platform", "Platform initialized ({:?} per frame)", frame_interval);

        Self {
            window: None,
            engine,
            frame_interval,
            last_step: None,
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a step fails.
    pub fn run(mut self) -> Result<(), EngineError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Whether enough time passed since the last step.
    fn frame_due(&self, now: Instant) -> bool {
        self.last_step
            .map_or(true, |last| now.saturating_duration_since(last) >= self.frame_interval)
    }

    /// Runs one engine step if due. Returns false on a fatal error.
    fn advance(&mut self, now: Instant) -> bool {
        if !self.frame_due(now) {
            return true;
        }
        self.last_step = Some(now);

        match self.engine.step() {
            Ok(()) => true,
            Err(e) => {
                error!(target: "platform", "Fatal error in frame: {}", e);
                self.failure = Some(e);
                false
            }
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.engine.window_title())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.failure = Some(PlatformError::WindowCreation(e.to_string()).into());
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                if !self.advance(Instant::now()) {
                    event_loop.exit();
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{journal, RecordingView};
    use crate::engine::EngineBuilder;

    fn started_platform(tps: f64, log: &crate::core::testing::Journal) -> Platform {
        let mut engine = EngineBuilder::new()
            .with_tps(tps)
            .with_initial_view(RecordingView::new("A", log))
            .build();
        engine.start().unwrap();
        Platform::new(engine)
    }

    #[test]
    fn platform_creation() {
        let log = journal();
        let platform = started_platform(60.0, &log);
        assert!(platform.window.is_none(), "Window should be created lazily");
        assert!(platform.failure.is_none());
    }

    #[test]
    fn first_frame_is_always_due() {
        let log = journal();
        let platform = started_platform(60.0, &log);
        assert!(platform.frame_due(Instant::now()));
    }

    #[test]
    fn advance_respects_frame_interval() {
        let log = journal();
        let mut platform = started_platform(10.0, &log);
        let t0 = Instant::now();

        assert!(platform.advance(t0));
        assert!(platform.advance(t0 + Duration::from_millis(50)));
        assert!(platform.advance(t0 + Duration::from_millis(150)));

        assert_eq!(platform.engine.coordinator().frame(), 2, "Mid-interval redraw skipped");
    }

    #[test]
    fn advance_keeps_fatal_error() {
        let log = journal();
        let engine = EngineBuilder::new()
            .with_initial_view(RecordingView::new("A", &log))
            .build();
        let mut platform = Platform::new(engine);

        assert!(!platform.advance(Instant::now()), "Unstarted engine must fail");
        assert!(matches!(platform.failure, Some(EngineError::Coordinator(_))));
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn window_creation_error_display() {
        let err = PlatformError::WindowCreation("no display".to_string());
        assert_eq!(err.to_string(), "window creation failed: no display");
    }
}
