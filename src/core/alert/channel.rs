//=========================================================================
// Alert Channel
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::AlertSink;

//=== Alert ===============================================================

/// A short message meant for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

//=== Construction ========================================================

/// Creates a connected sender/receiver pair holding at most `capacity`
/// undelivered alerts.
///
/// # Panics
///
/// Panics if `capacity == 0`.
pub fn alert_channel(capacity: usize) -> (AlertChannel, AlertReceiver) {
    assert!(capacity > 0, "Alert capacity must be positive");

    let (sender, receiver) = bounded(capacity);
    (AlertChannel { sender }, AlertReceiver { receiver })
}

//=== AlertChannel ========================================================

/// Sending half. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct AlertChannel {
    sender: Sender<Alert>,
}

impl AlertChannel {
    /// Queues `message` for display.
    ///
    /// Never blocks. Delivery is best-effort: when the channel is full or
    /// the receiver is gone the alert is dropped.
    pub fn notify(&self, message: impl Into<String>) {
        match self.sender.try_send(Alert::new(message)) {
            Ok(()) => {}
            Err(TrySendError::Full(alert)) => {
                debug!(target: "alert", "Alert channel full, dropping: {}", alert.message);
            }
            Err(TrySendError::Disconnected(alert)) => {
                debug!(target: "alert", "Alert receiver gone, dropping: {}", alert.message);
            }
        }
    }
}

//=== AlertReceiver =======================================================

/// Receiving half, drained by the host once per frame.
#[derive(Debug)]
pub struct AlertReceiver {
    receiver: Receiver<Alert>,
}

impl AlertReceiver {
    /// Number of alerts waiting for delivery.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Takes every queued alert.
    pub fn drain(&self) -> Vec<Alert> {
        self.receiver.try_iter().collect()
    }

    /// Hands every queued alert to `sink`.
    ///
    /// Sink failures are logged and skipped. Returns the number of alerts
    /// the sink accepted.
    pub fn drain_into(&self, sink: &mut dyn AlertSink) -> usize {
        let mut delivered = 0;

        for alert in self.receiver.try_iter() {
            match sink.display(&alert) {
                Ok(()) => delivered += 1,
                Err(e) => warn!(target: "alert", "Dropping alert '{}': {}", alert.message, e),
            }
        }

        if delivered > 0 {
            trace!(target: "alert", "Delivered {} alerts", delivered);
        }
        delivered
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alert::SinkError;

    struct RecordingSink {
        shown: Vec<String>,
        reject: &'static str,
    }

    impl AlertSink for RecordingSink {
        fn display(&mut self, alert: &Alert) -> Result<(), SinkError> {
            if alert.message == self.reject {
                return Err(SinkError::new("display unavailable"));
            }
            self.shown.push(alert.message.clone());
            Ok(())
        }
    }

    #[test]
    fn notify_then_drain_preserves_order() {
        let (channel, receiver) = alert_channel(8);
        channel.notify("first");
        channel.notify(String::from("second"));

        assert_eq!(receiver.pending(), 2);
        assert_eq!(receiver.drain(), vec![Alert::new("first"), Alert::new("second")]);
        assert_eq!(receiver.pending(), 0);
    }

    #[test]
    fn notify_on_full_channel_drops_without_blocking() {
        let (channel, receiver) = alert_channel(1);
        channel.notify("kept");
        channel.notify("dropped");

        assert_eq!(receiver.drain(), vec![Alert::new("kept")]);
    }

    #[test]
    fn notify_after_receiver_dropped_is_silent() {
        let (channel, receiver) = alert_channel(4);
        drop(receiver);

        // Should not panic
        channel.notify("nobody listens");
    }

    #[test]
    fn clones_feed_the_same_receiver() {
        let (channel, receiver) = alert_channel(4);
        let other = channel.clone();

        std::thread::spawn(move || other.notify("from thread"))
            .join()
            .unwrap();
        channel.notify("from main");

        assert_eq!(receiver.pending(), 2);
    }

    #[test]
    fn drain_into_skips_sink_failures() {
        let (channel, receiver) = alert_channel(4);
        channel.notify("a");
        channel.notify("broken");
        channel.notify("b");

        let mut sink = RecordingSink {
            shown: Vec::new(),
            reject: "broken",
        };

        assert_eq!(receiver.drain_into(&mut sink), 2);
        assert_eq!(sink.shown, vec!["a", "b"]);
        assert_eq!(receiver.pending(), 0, "Failed alerts are consumed too");
    }

    #[test]
    #[should_panic(expected = "Alert capacity must be positive")]
    fn zero_capacity_panics() {
        alert_channel(0);
    }
}
