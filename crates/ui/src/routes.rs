use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::app::use_tracker_state;
use crate::context::AppContext;
use crate::views::{
    MealPrepView, NotesView, NutritionView, ProgressView, TrainingView, WeightView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", TrainingView)] Training {},
        #[route("/notes", NotesView)] Notes {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/weight", WeightView)] Weight {},
        #[route("/nutrition", NutritionView)] Nutrition {},
        #[route("/meal-prep", MealPrepView)] MealPrep {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_tracker_state();
    let reminder = state.read().reminder().text();

    rsx! {
        div { class: "app",
            h1 { class: "app-title", "{ctx.title()}" }
            if let Some(text) = reminder {
                p { class: "reminder", "{text}" }
            }
            TabBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TabBar() -> Element {
    rsx! {
        nav { class: "tabs",
            Link { class: "tab", active_class: "tab-active", to: Route::Training {}, "Training A" }
            Link { class: "tab", active_class: "tab-active", to: Route::Notes {}, "Notizen" }
            Link { class: "tab", active_class: "tab-active", to: Route::Progress {}, "Fortschritt" }
            Link { class: "tab", active_class: "tab-active", to: Route::Weight {}, "Gewicht" }
            Link { class: "tab", active_class: "tab-active", to: Route::Nutrition {}, "Ernährung" }
            Link { class: "tab", active_class: "tab-active", to: Route::MealPrep {}, "Meal Prep" }
        }
    }
}
