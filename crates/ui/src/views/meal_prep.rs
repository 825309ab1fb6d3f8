use dioxus::prelude::*;
use trainer_core::model::NoteField;
use trainer_core::model::guidance::meal_prep_line;

use crate::views::NoteArea;

#[component]
pub fn MealPrepView() -> Element {
    let suggestions = meal_prep_line();

    rsx! {
        div { class: "page card",
            h2 { "Meal Prep Übersicht" }
            NoteArea { field: NoteField::MealPrep }
            p { class: "muted", "{suggestions}" }
        }
    }
}
