use dioxus::prelude::*;
use trainer_core::model::NoteField;
use trainer_core::model::guidance::nutrition_lists;

use crate::views::NoteArea;

#[component]
pub fn NutritionView() -> Element {
    rsx! {
        div { class: "page card",
            h2 { "Ernährungstracker & Tipps" }
            NoteArea { field: NoteField::Food }
            for list in nutrition_lists() {
                div { class: "guidance",
                    h3 { "{list.title}" }
                    ul {
                        for item in list.items {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}
