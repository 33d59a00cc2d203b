//=========================================================================
// Transition Slot
//=========================================================================
//
// Holds at most one pending view transition.
//
// Views and the host write here at any time before the tick boundary.
// The coordinator takes the slot at the start of the next tick. A newer
// request replaces an older one; the replaced view was never entered,
// so it is dropped without exit().
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::View;

//=== TransitionSlot ======================================================

/// Last-writer-wins holder for the next view.
#[derive(Default)]
pub struct TransitionSlot {
    pending: Option<Box<dyn View>>,
}

impl TransitionSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Records `view` as the next view, dropping any earlier request.
    pub fn request(&mut self, view: Box<dyn View>) {
        if let Some(superseded) = self.pending.replace(view) {
            debug!(
                "Pending transition to {} superseded by {}",
                superseded.name(),
                self.pending_name().unwrap_or_default()
            );
        }
    }

    /// Whether a transition is waiting for the next tick.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Name of the pending view, if any.
    pub fn pending_name(&self) -> Option<&str> {
        self.pending.as_deref().map(|view| view.name())
    }

    /// Takes the pending view, leaving the slot empty.
    pub fn take(&mut self) -> Option<Box<dyn View>> {
        self.pending.take()
    }

    /// Drops the pending view, if any.
    pub fn clear(&mut self) {
        if let Some(discarded) = self.pending.take() {
            debug!("Discarded pending transition to {}", discarded.name());
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

    #[test]
    fn new_slot_is_empty() {
        let mut slot = TransitionSlot::new();
        assert!(!slot.is_pending());
        assert!(slot.pending_name().is_none());
        assert!(slot.take().is_none());
    }

    #[test]
    fn request_overwrites_and_drops_previous() {
        let log = journal();
        let mut slot = TransitionSlot::new();

        slot.request(Box::new(RecordingView::new("B", &log)));
        slot.request(Box::new(RecordingView::new("C", &log)));

        assert_eq!(slot.pending_name(), Some("C"));
        assert_eq!(*log.borrow(), vec!["B.drop"], "B is dropped without enter or exit");
    }

    #[test]
    fn take_empties_slot() {
        let log = journal();
        let mut slot = TransitionSlot::new();
        slot.request(Box::new(RecordingView::new("A", &log)));

        let view = slot.take().unwrap();
        assert_eq!(view.name(), "A");
        assert!(!slot.is_pending());
    }

    #[test]
    fn clear_drops_pending_view() {
        let log = journal();
        let mut slot = TransitionSlot::new();
        slot.request(Box::new(RecordingView::new("A", &log)));

        slot.clear();

        assert!(!slot.is_pending());
        assert_eq!(*log.borrow(), vec!["A.drop"]);
    }
}
