use dioxus::prelude::*;
use trainer_core::model::NoteField;

use crate::app::use_tracker_state;
use crate::views::{TrackerIntent, use_tracker_dispatcher};
use crate::vm::format_percent;

#[component]
pub fn ProgressBar(value: f64) -> Element {
    let value = value.clamp(0.0, 100.0);
    let width = format!("width: {value:.2}%");
    let label = format_percent(value);

    rsx! {
        div { class: "progress-row",
            div { class: "progress",
                div { class: "progress-indicator", style: "{width}" }
            }
            span { class: "progress-label", "{label}" }
        }
    }
}

/// Free-text area bound to one of the session's note fields.
#[component]
pub fn NoteArea(field: NoteField) -> Element {
    let state = use_tracker_state();
    let dispatcher = use_tracker_dispatcher();
    let text = state.read().note(field).to_string();

    rsx! {
        textarea {
            class: "note-input",
            rows: 5,
            placeholder: field.placeholder(),
            value: "{text}",
            oninput: move |evt| dispatcher.dispatch.call(TrackerIntent::SetNote(field, evt.value())),
        }
    }
}
