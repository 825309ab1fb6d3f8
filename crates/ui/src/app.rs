use dioxus::prelude::*;
use dioxus_router::Router;
use services::TrackerState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::WeightDraft;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    // The one live session; every tab reads and replaces it.
    use_context_provider(|| Signal::new(ctx.start_session()));
    use_context_provider(|| WeightDraft(Signal::new(String::new())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{ctx.title()}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

/// The live session. Views read it here and change it by dispatching a `TrackerIntent`.
#[must_use]
pub fn use_tracker_state() -> Signal<TrackerState> {
    use_context::<Signal<TrackerState>>()
}
