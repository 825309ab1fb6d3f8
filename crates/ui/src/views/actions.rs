use std::path::PathBuf;

use dioxus::prelude::*;
use services::{TrackerService, TrackerState};
use trainer_core::model::NoteField;

use crate::app::use_tracker_state;
use crate::context::AppContext;

/// Every user event the tabs can raise.
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerIntent {
    ToggleExercise(&'static str),
    SetWeightInput(String),
    /// Submit whatever is in the weight field. Blank input is ignored and kept.
    SubmitWeight,
    SetGoalInput(String),
    SetNote(NoteField, String),
    AddPhotos(Vec<PathBuf>),
}

/// Text of the weight field, shared so it survives switching tabs.
#[derive(Clone, Copy)]
pub struct WeightDraft(pub Signal<String>);

#[derive(Clone, Copy)]
pub struct TrackerDispatcher {
    pub dispatch: Callback<TrackerIntent>,
    pub weight_input: Signal<String>,
}

#[must_use]
pub fn use_tracker_dispatcher() -> TrackerDispatcher {
    let ctx = use_context::<AppContext>();
    let state = use_tracker_state();
    let WeightDraft(weight_input) = use_context::<WeightDraft>();

    let dispatch = use_callback(move |intent: TrackerIntent| {
        dispatch_intent(intent, state, weight_input, &ctx.tracker());
    });

    TrackerDispatcher {
        dispatch,
        weight_input,
    }
}

fn dispatch_intent(
    intent: TrackerIntent,
    state: Signal<TrackerState>,
    mut weight_input: Signal<String>,
    tracker: &TrackerService,
) {
    match intent {
        TrackerIntent::ToggleExercise(label) => apply(state, |s| s.toggled(label)),
        TrackerIntent::SetWeightInput(raw) => weight_input.set(raw),
        TrackerIntent::SubmitWeight => {
            let raw = weight_input.peek().clone();
            if raw.trim().is_empty() {
                return;
            }
            apply(state, |s| tracker.add_weight_input(s, &raw));
            weight_input.set(String::new());
        }
        TrackerIntent::SetGoalInput(raw) => apply(state, |s| s.with_goal_input(raw)),
        TrackerIntent::SetNote(field, text) => apply(state, |s| s.with_note(field, text)),
        TrackerIntent::AddPhotos(paths) => {
            tracing::debug!(count = paths.len(), "progress photos selected");
            apply(state, |s| tracker.add_image_paths(s, paths));
        }
    }
}

/// Replace the session with the result of `transition`.
///
/// Transitions take the state by value, so the current one is moved out and the
/// next one written back in a single borrow.
fn apply(mut state: Signal<TrackerState>, transition: impl FnOnce(TrackerState) -> TrackerState) {
    state.with_mut(|current| *current = transition(std::mem::take(current)));
}
