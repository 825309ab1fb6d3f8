use dioxus::prelude::*;

use crate::app::use_tracker_state;
use crate::views::{TrackerIntent, use_tracker_dispatcher};
use crate::vm::{ExerciseRowVm, map_exercise_rows};

#[component]
pub fn TrainingView() -> Element {
    let state = use_tracker_state();
    let rows = map_exercise_rows(&state.read());

    rsx! {
        div { class: "page card",
            for row in rows {
                ExerciseRow { key: "{row.label}", row }
            }
        }
    }
}

#[component]
fn ExerciseRow(row: ExerciseRowVm) -> Element {
    let dispatcher = use_tracker_dispatcher();
    let label = row.label;
    let label_class = if row.done { "exercise-label done" } else { "exercise-label" };
    let button_class = if row.done { "btn btn-outline" } else { "btn" };

    rsx! {
        div { class: "exercise-row",
            span { class: label_class, "{row.label}" }
            button {
                class: button_class,
                r#type: "button",
                onclick: move |_| dispatcher.dispatch.call(TrackerIntent::ToggleExercise(label)),
                "{row.action_label}"
            }
        }
    }
}
