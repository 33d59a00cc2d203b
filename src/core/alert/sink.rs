//=========================================================================
// Alert Sinks
//=========================================================================
//
// Display surfaces that alerts are delivered to.
//
//=========================================================================

use log::info;
use thiserror::Error;

use super::Alert;

/// Failure reported by a display surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("alert sink failed: {0}")]
pub struct SinkError(String);

impl SinkError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Somewhere alerts can be shown to the player.
pub trait AlertSink {
    fn display(&mut self, alert: &Alert) -> Result<(), SinkError>;
}

/// Writes alerts to the `alert` log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn display(&mut self, alert: &Alert) -> Result<(), SinkError> {
        info!(target: "alert", "{}", alert.message);
        Ok(())
    }
}
