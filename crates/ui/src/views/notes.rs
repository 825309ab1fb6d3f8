use dioxus::prelude::*;
use trainer_core::model::NoteField;

use crate::views::NoteArea;

#[component]
pub fn NotesView() -> Element {
    rsx! {
        div { class: "page card",
            NoteArea { field: NoteField::Training }
        }
    }
}
