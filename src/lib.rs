//=========================================================================
// Aetheric Views — Library Root
//
// Frame coordinator for a real-time game runtime.
//
// Responsibilities:
// - Keep exactly one view (menu, gameplay, loading, ...) active
// - Apply view transitions only at the start of a tick
// - Own the long-lived object handles views share
// - Carry fire-and-forget alerts to the player
//
// Typical usage:
// ```no_run
// use aetheric_views::prelude::*;
//
// fn main() -> Result<(), EngineError> {
//     EngineBuilder::new().with_initial_view(MyMenu::new()).build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the coordinator, the view trait, the object registry and
// the alert channel. Hosts that run their own loop only need this.
//
// `logging` installs the `env_logger` backend for the `log` facade.
//
pub mod core;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` runs the Winit event loop and is not part of the public API.
// `engine` wraps the coordinator with a host loop.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
pub use platform::PlatformError;
