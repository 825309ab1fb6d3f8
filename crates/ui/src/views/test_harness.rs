use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{FixedMessageSource, TrackerService, TrackerState};
use trainer_core::time::fixed_clock_at_hour;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{
    MealPrepView, WeightDraft, NotesView, NutritionView, ProgressView, TrainingView, WeightView,
};

pub const TEST_TITLE: &str = "Trainingsplan App";

#[derive(Clone)]
pub struct TestApp {
    tracker: Arc<TrackerService>,
}

impl TestApp {
    pub fn new(tracker: Arc<TrackerService>) -> Self {
        Self { tracker }
    }
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        TEST_TITLE.to_string()
    }

    fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The full routed page: title, reminder, tab bar and the default tab.
    Shell,
    Training,
    Notes,
    Progress,
    Weight,
    Nutrition,
    MealPrep,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    state: TrackerState,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.state.clone()));
    use_context_provider(|| WeightDraft(Signal::new(String::new())));
    use_context_provider(|| props.view);
    match props.view {
        ViewKind::Shell => rsx! { Router::<Route> {} },
        _ => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Shell | ViewKind::Training => rsx! { TrainingView {} },
        ViewKind::Notes => rsx! { NotesView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Weight => rsx! { WeightView {} },
        ViewKind::Nutrition => rsx! { NutritionView {} },
        ViewKind::MealPrep => rsx! { MealPrepView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub tracker: Arc<TrackerService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Tracker pinned to 10:00 on the test date, always picking the first motivator.
pub fn test_tracker() -> Arc<TrackerService> {
    Arc::new(TrackerService::new(
        fixed_clock_at_hour(10),
        Arc::new(FixedMessageSource(0)),
    ))
}

pub fn setup_view_harness(view: ViewKind, state: TrackerState) -> ViewHarness {
    let tracker = test_tracker();
    let app = Arc::new(TestApp {
        tracker: Arc::clone(&tracker),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, state });

    ViewHarness { dom, tracker }
}
