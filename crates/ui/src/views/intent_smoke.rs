use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use services::{MOTIVATORS, TrackerState};
use trainer_core::Reminder;
use trainer_core::model::{CompletionMap, ImageRef, NoteField, TRAINING_A, WeightSample};

use crate::context::{UiApp, build_app_context};

use super::actions::{TrackerIntent, WeightDraft, use_tracker_dispatcher};
use super::test_harness::{TestApp, drive_dom, test_tracker};

#[derive(Clone, Default)]
struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<TrackerIntent>>>>,
    state: Rc<RefCell<Option<Signal<TrackerState>>>>,
    weight_input: Rc<RefCell<Option<Signal<String>>>>,
}

impl HarnessHandles {
    fn dispatch(&self) -> Callback<TrackerIntent> {
        self.dispatch.borrow().expect("dispatch registered")
    }

    fn state(&self) -> Signal<TrackerState> {
        self.state.borrow().expect("state registered")
    }

    fn weight_input(&self) -> Signal<String> {
        self.weight_input.borrow().expect("weight input registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    state: TrackerState,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TrackerIntentHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp::new(test_tracker()));
    use_context_provider(|| build_app_context(&app));
    let state = use_context_provider(|| Signal::new(props.state.clone()));
    use_context_provider(|| WeightDraft(Signal::new(String::new())));

    let dispatcher = use_tracker_dispatcher();
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatcher.dispatch);
        *props.handles.state.borrow_mut() = Some(state);
        *props.handles.weight_input.borrow_mut() = Some(dispatcher.weight_input);
    }
    rsx! { div {} }
}

struct Session {
    dom: VirtualDom,
    handles: HarnessHandles,
}

impl Session {
    fn start(state: TrackerState) -> Self {
        let handles = HarnessHandles::default();
        let mut dom = VirtualDom::new_with_props(
            TrackerIntentHarness,
            HarnessProps {
                state,
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);
        Self { dom, handles }
    }

    fn send(&mut self, intent: TrackerIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    fn state(&self) -> TrackerState {
        let state = self.handles.state();
        self.dom.in_runtime(|| state.peek().clone())
    }

    fn weight_input(&self) -> String {
        let input = self.handles.weight_input();
        self.dom.in_runtime(|| input.peek().clone())
    }
}

#[test]
fn blank_weight_submit_keeps_field_and_log() {
    let mut session = Session::start(TrackerState::default());

    session.send(TrackerIntent::SetWeightInput("  ".to_string()));
    session.send(TrackerIntent::SubmitWeight);

    assert!(session.state().weights().is_empty());
    assert_eq!(session.weight_input(), "  ");
}

#[test]
fn weight_submit_appends_sample_and_clears_field() {
    let mut session = Session::start(TrackerState::default());

    session.send(TrackerIntent::SetWeightInput("80".to_string()));
    session.send(TrackerIntent::SubmitWeight);

    let state = session.state();
    assert_eq!(state.weights().len(), 1);
    assert_eq!(state.weights().latest().map(WeightSample::weight), Some(80.0));
    assert_eq!(session.weight_input(), "");
}

#[test]
fn garbage_weight_submit_leaves_log_unchanged() {
    let mut session = Session::start(TrackerState::default());

    session.send(TrackerIntent::SetWeightInput("achtzig".to_string()));
    session.send(TrackerIntent::SubmitWeight);

    assert!(session.state().weights().is_empty());
}

#[test]
fn lighter_weigh_in_moves_goal_bar_and_shows_motivator() {
    let mut session = Session::start(TrackerState::new(Reminder::Morning));

    session.send(TrackerIntent::SetGoalInput("75".to_string()));
    for raw in ["80", "78"] {
        session.send(TrackerIntent::SetWeightInput(raw.to_string()));
        session.send(TrackerIntent::SubmitWeight);
    }

    let state = session.state();
    assert_eq!(state.goal_input(), "75");
    assert!((state.goal_progress() - 40.0).abs() < 1e-9);
    assert_eq!(state.active_message(), Some(MOTIVATORS[0]));

    session.send(TrackerIntent::SetWeightInput("79".to_string()));
    session.send(TrackerIntent::SubmitWeight);
    assert_eq!(session.state().active_message(), None);
}

#[test]
fn double_toggle_leaves_checklist_as_fresh() {
    let mut session = Session::start(TrackerState::default());

    session.send(TrackerIntent::ToggleExercise(TRAINING_A[2]));
    assert!(session.state().is_completed(TRAINING_A[2]));
    session.send(TrackerIntent::ToggleExercise(TRAINING_A[2]));

    assert_eq!(session.state().completed(), &CompletionMap::new());
}

#[test]
fn note_intent_updates_only_its_field() {
    let mut session = Session::start(TrackerState::default());

    session.send(TrackerIntent::SetNote(NoteField::Food, "Viel Gemüse".to_string()));

    let state = session.state();
    assert_eq!(state.note(NoteField::Food), "Viel Gemüse");
    assert_eq!(state.note(NoteField::Training), "");
}

#[test]
fn photo_selection_skips_empty_paths() {
    let mut session = Session::start(TrackerState::default());

    session.send(TrackerIntent::AddPhotos(vec![
        PathBuf::from("/photos/a.jpg"),
        PathBuf::new(),
        PathBuf::from("/photos/b.jpg"),
    ]));

    let sources: Vec<String> = session
        .state()
        .images()
        .iter()
        .map(ImageRef::display_src)
        .collect();
    assert_eq!(sources, ["/photos/a.jpg", "/photos/b.jpg"]);
}
