//=========================================================================
// Alert Channel
//=========================================================================
//
// Fire-and-forget user-facing messages.
//
// Architecture:
//   views / coordinator → AlertChannel::notify() ─┐
//                                                  │ crossbeam (bounded)
//   host loop ← AlertReceiver::drain_into(sink) ◄──┘
//
// Senders never block and never fail. A full or disconnected channel
// drops the alert.
//
//=========================================================================

//=== Module Declarations =================================================

mod channel;
mod sink;

//=== Public API ==========================================================

pub use channel::{alert_channel, Alert, AlertChannel, AlertReceiver};
pub use sink::{AlertSink, LogAlertSink, SinkError};
