//=========================================================================
// Test Support
//=========================================================================
//
// RecordingView writes every lifecycle call into a shared journal as
// "<label>.<event>" so tests can assert exact call order.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::view::{RenderContext, View, ViewContext, ViewError};

pub(crate) type Journal = Rc<RefCell<Vec<String>>>;

type TickHook = Box<dyn FnMut(&mut ViewContext<'_>)>;

pub(crate) fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub(crate) struct RecordingView {
    label: &'static str,
    journal: Journal,
    fail_enter: bool,
    fail_exit: bool,
    on_enter: Option<TickHook>,
    on_tick: Option<TickHook>,
}

impl RecordingView {
    pub(crate) fn new(label: &'static str, journal: &Journal) -> Self {
        Self {
            label,
            journal: Rc::clone(journal),
            fail_enter: false,
            fail_exit: false,
            on_enter: None,
            on_tick: None,
        }
    }

    pub(crate) fn failing_enter(mut self) -> Self {
        self.fail_enter = true;
        self
    }

    pub(crate) fn failing_exit(mut self) -> Self {
        self.fail_exit = true;
        self
    }

    pub(crate) fn on_enter(mut self, hook: impl FnMut(&mut ViewContext<'_>) + 'static) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    pub(crate) fn on_tick(mut self, hook: impl FnMut(&mut ViewContext<'_>) + 'static) -> Self {
        self.on_tick = Some(Box::new(hook));
        self
    }

    fn record(&self, event: &str) {
        self.journal.borrow_mut().push(format!("{}.{}", self.label, event));
    }
}

impl View for RecordingView {
    fn name(&self) -> &str {
        self.label
    }

    fn enter(&mut self, ctx: &mut ViewContext) -> Result<(), ViewError> {
        self.record("enter");
        if let Some(hook) = self.on_enter.as_mut() {
            hook(ctx);
        }
        if self.fail_enter {
            return Err(ViewError::failed(format!("{} refused to enter", self.label)));
        }
        Ok(())
    }

    fn exit(&mut self, _ctx: &mut ViewContext) -> Result<(), ViewError> {
        self.record("exit");
        if self.fail_exit {
            return Err(ViewError::failed(format!("{} failed to exit", self.label)));
        }
        Ok(())
    }

    fn tick(&mut self, ctx: &mut ViewContext) {
        self.record("tick");
        if let Some(hook) = self.on_tick.as_mut() {
            hook(ctx);
        }
    }

    fn render(&self, _ctx: &RenderContext) {
        self.record("render");
    }
}

impl Drop for RecordingView {
    fn drop(&mut self) {
        self.record("drop");
    }
}
