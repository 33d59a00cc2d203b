//=========================================================================
// Coordinator Lifecycle — Integration Tests
//=========================================================================
//
// Drives the public API the way a host loop does and checks the
// lifecycle calls each view receives.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;

use aetheric_views::core::objects::{ArenaObjectFactory, DEFAULT_PRESPAWN};
use aetheric_views::prelude::*;

//=== Test View ===========================================================

type Calls = Rc<RefCell<Vec<String>>>;

struct Probe {
    label: &'static str,
    calls: Calls,
    refuse_enter: bool,
}

impl Probe {
    fn new(label: &'static str, calls: &Calls) -> Self {
        Self {
            label,
            calls: Rc::clone(calls),
            refuse_enter: false,
        }
    }

    fn refusing(label: &'static str, calls: &Calls) -> Self {
        let mut probe = Self::new(label, calls);
        probe.refuse_enter = true;
        probe
    }

    fn note(&self, what: &str) {
        self.calls.borrow_mut().push(format!("{}:{}", self.label, what));
    }
}

impl View for Probe {
    fn name(&self) -> &str {
        self.label
    }

    fn enter(&mut self, _ctx: &mut ViewContext) -> Result<(), ViewError> {
        self.note("enter");
        if self.refuse_enter {
            return Err(ViewError::failed("not today"));
        }
        Ok(())
    }

    fn exit(&mut self, _ctx: &mut ViewContext) -> Result<(), ViewError> {
        self.note("exit");
        Ok(())
    }

    fn tick(&mut self, _ctx: &mut ViewContext) {
        self.note("tick");
    }

    fn render(&self, _ctx: &RenderContext) {
        self.note("render");
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        self.note("drop");
    }
}

fn calls() -> Calls {
    Rc::new(RefCell::new(Vec::new()))
}

fn started_with_a(calls: &Calls) -> FrameCoordinator {
    let (mut coordinator, _alerts) = CoordinatorBuilder::new()
        .with_initial_view(Probe::new("A", calls))
        .build();
    coordinator.start().expect("start should succeed");
    calls.borrow_mut().clear();
    coordinator
}

//=========================================================================
// Scenarios
//=========================================================================

#[test]
fn superseded_request_is_never_entered_and_latest_wins() {
    let calls = calls();
    let mut coordinator = started_with_a(&calls);

    coordinator.transition_to(Probe::new("B", &calls));
    coordinator.transition_to(Probe::new("C", &calls));
    coordinator.on_tick().unwrap();
    coordinator.on_render().unwrap();

    assert_eq!(coordinator.current_view_name(), Some("C"));
    assert_eq!(
        *calls.borrow(),
        vec!["B:drop", "C:enter", "A:exit", "A:drop", "C:tick", "C:render"]
    );
}

#[test]
fn refused_enter_keeps_previous_view_running() {
    let calls = calls();
    let mut coordinator = started_with_a(&calls);

    coordinator.transition_to(Probe::new("B", &calls));
    coordinator.transition_to(Probe::refusing("C", &calls));
    coordinator.on_tick().unwrap();
    coordinator.on_render().unwrap();

    assert_eq!(coordinator.current_view_name(), Some("A"));
    assert!(!calls.borrow().iter().any(|call| call == "A:exit"));

    let events = coordinator.take_events();
    assert!(
        matches!(
            events.as_slice(),
            [CoordinatorEvent::TransitionFailed { to, .. }] if to == "C"
        ),
        "Expected one TransitionFailed event, got {:?}",
        events
    );
}

#[test]
fn exactly_one_view_is_current_across_many_frames() {
    let calls = calls();
    let mut coordinator = started_with_a(&calls);
    let labels = ["B", "C", "D", "E"];

    for (frame, label) in labels.iter().enumerate() {
        if frame % 2 == 0 {
            coordinator.transition_to(Probe::new(label, &calls));
        } else {
            coordinator.transition_to(Probe::refusing(label, &calls));
        }
        coordinator.on_tick().unwrap();
        coordinator.on_render().unwrap();
        assert!(coordinator.current_view_name().is_some());
    }

    // B and D entered, C and E were refused
    assert_eq!(coordinator.current_view_name(), Some("D"));

    let entered = calls.borrow().iter().filter(|c| c.ends_with(":enter")).count();
    let exited = calls.borrow().iter().filter(|c| c.ends_with(":exit")).count();
    assert_eq!(entered, 4);
    assert_eq!(exited, 2, "Only A and B were ever replaced");
}

#[test]
fn second_start_is_rejected() {
    let calls = calls();
    let mut coordinator = started_with_a(&calls);

    assert_eq!(coordinator.start(), Err(CoordinatorError::AlreadyStarted));
    assert_eq!(coordinator.current_view_name(), Some("A"));
    assert!(calls.borrow().is_empty());
}

#[test]
fn render_before_start_is_rejected_without_touching_views() {
    let calls = calls();
    let (coordinator, _alerts) = CoordinatorBuilder::new()
        .with_initial_view(Probe::new("A", &calls))
        .build();

    assert_eq!(coordinator.on_render(), Err(CoordinatorError::NotStarted));
    assert!(calls.borrow().is_empty());
}

#[test]
fn render_after_refused_initial_enter_is_rejected_without_render() {
    let calls = calls();
    let (mut coordinator, _alerts) = CoordinatorBuilder::new()
        .with_initial_view(Probe::refusing("A", &calls))
        .build();

    assert!(matches!(
        coordinator.start(),
        Err(CoordinatorError::InitialViewFailed { .. })
    ));
    assert_eq!(coordinator.on_render(), Err(CoordinatorError::NotStarted));
    assert_eq!(*calls.borrow(), vec!["A:enter", "A:drop"]);
}

#[test]
fn startup_fails_when_object_system_is_exhausted() {
    let calls = calls();
    let (mut coordinator, _alerts) = CoordinatorBuilder::new()
        .with_object_factory(ArenaObjectFactory::new(DEFAULT_PRESPAWN.len() - 1))
        .with_initial_view(Probe::new("A", &calls))
        .build();

    let err = coordinator.start().unwrap_err();
    assert!(matches!(err, CoordinatorError::Prespawn(RegistryError::Spawn { .. })));
    assert!(!coordinator.is_started());
}

#[test]
fn before_player_spawn_is_idempotent() {
    let calls = calls();
    let mut coordinator = started_with_a(&calls);
    let before: Vec<String> = coordinator.objects().names().map(String::from).collect();

    coordinator.before_player_spawn().unwrap();
    coordinator.before_player_spawn().unwrap();

    let after: Vec<String> = coordinator.objects().names().map(String::from).collect();
    assert_eq!(before, after);
    assert_eq!(after, DEFAULT_PRESPAWN);
}

#[test]
fn before_player_spawn_brings_back_invalidated_objects() {
    let calls = calls();
    let mut coordinator = started_with_a(&calls);
    let old = coordinator.objects().lookup("test_moby").unwrap();

    struct Clearing;
    impl View for Clearing {
        fn enter(&mut self, ctx: &mut ViewContext) -> Result<(), ViewError> {
            if let Some(handle) = ctx.objects().lookup("test_moby") {
                ctx.objects_mut().invalidate(handle);
            }
            Ok(())
        }
        fn tick(&mut self, _ctx: &mut ViewContext) {}
        fn render(&self, _ctx: &RenderContext) {}
    }

    coordinator.transition_to(Clearing);
    coordinator.on_tick().unwrap();
    coordinator.before_player_spawn().unwrap();

    let new = coordinator.objects().lookup("test_moby").expect("test_moby must be restored");
    assert_ne!(old, new);
    assert!(coordinator.objects().get(old).is_none());
}

#[test]
fn engine_runs_headless_frames() {
    let calls = calls();
    let mut engine = EngineBuilder::new()
        .with_initial_view(Probe::new("A", &calls))
        .build();

    engine.run_frames(2).unwrap();

    assert_eq!(
        *calls.borrow(),
        vec!["A:enter", "A:tick", "A:render", "A:tick", "A:render"]
    );
}
