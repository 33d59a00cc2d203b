//=========================================================================
// View System
//=========================================================================
//
// A view is one screen or mode of the game (menu, gameplay, loading).
//
// Lifecycle:
//   constructed → transition_to() → [tick boundary] → enter()
//     → tick()/render() every frame → exit() → dropped
//
// Views never touch the coordinator directly. They receive a
// ViewContext on mutable callbacks and a RenderContext on render.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Module Declarations =================================================

mod context;
mod transition_slot;

//=== Public API ==========================================================

pub use context::{RenderContext, ViewContext};
pub use transition_slot::TransitionSlot;

use crate::core::objects::RegistryError;

//=== ViewError ===========================================================

/// Failure raised by a view lifecycle callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A required registry object does not exist.
    #[error("required object '{0}' is unavailable")]
    MissingObject(String),

    /// Creating a registry object failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Any other view-specific failure.
    #[error("{0}")]
    Failed(String),
}

impl ViewError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

//=== View Trait ==========================================================

/// Behavior of a single screen or game mode.
///
/// Only `enter`, `tick` and `render` are required.
///
/// ```rust
/// # use aetheric_views::prelude::*;
/// struct Splash {
///     frames_left: u32,
/// }
///
/// impl View for Splash {
///     fn enter(&mut self, _ctx: &mut ViewContext) -> Result<(), ViewError> {
///         self.frames_left = 120;
///         Ok(())
///     }
///
///     fn tick(&mut self, _ctx: &mut ViewContext) {
///         self.frames_left = self.frames_left.saturating_sub(1);
///     }
///
///     fn render(&self, _ctx: &RenderContext) {}
/// }
/// ```
pub trait View {
    /// Label used in logs and coordinator events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called once when the view becomes current.
    ///
    /// Either leave the view ready to tick and render, or return an error
    /// without side effects. On error the previous view stays current.
    fn enter(&mut self, ctx: &mut ViewContext) -> Result<(), ViewError>;

    /// Called once when the view is replaced, before it is dropped.
    ///
    /// Errors are logged and ignored; the transition always completes.
    fn exit(&mut self, _ctx: &mut ViewContext) -> Result<(), ViewError> {
        Ok(())
    }

    /// Called every tick while the view is current.
    ///
    /// May request a transition through [`ViewContext::transition_to`].
    fn tick(&mut self, ctx: &mut ViewContext);

    /// Called every frame after the tick. Read-only.
    fn render(&self, ctx: &RenderContext);
}
