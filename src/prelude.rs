//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_views::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine host loop
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Coordinator
pub use crate::core::coordinator::{CoordinatorBuilder, CoordinatorError, CoordinatorEvent, FrameCoordinator};

// Views
pub use crate::core::view::{RenderContext, View, ViewContext, ViewError};

// Objects
pub use crate::core::objects::{ObjectFactory, ObjectHandle, ObjectRegistry, RegistryError};

// Alerts
pub use crate::core::alert::{Alert, AlertChannel, AlertSink};
