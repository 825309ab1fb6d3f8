use std::path::PathBuf;

use dioxus::prelude::*;
use trainer_core::model::ImageRef;

use crate::app::use_tracker_state;
use crate::views::{ProgressBar, TrackerIntent, use_tracker_dispatcher};

#[derive(Clone, Debug, PartialEq, Eq)]
struct PhotoVm {
    src: String,
    alt: String,
}

#[component]
pub fn ProgressView() -> Element {
    let state = use_tracker_state();
    let dispatcher = use_tracker_dispatcher();

    let (completion, photos) = {
        let current = state.read();
        let photos: Vec<PhotoVm> = current
            .images()
            .iter()
            .map(ImageRef::display_src)
            .enumerate()
            .map(|(idx, src)| PhotoVm {
                src,
                alt: format!("Fortschritt {}", idx + 1),
            })
            .collect();
        (current.completion_percent(), photos)
    };

    rsx! {
        div { class: "page card",
            h2 { "Wochenfortschritt" }
            div { class: "stack",
                span { "Trainingseinheit A abgeschlossen:" }
                ProgressBar { value: completion }
            }

            h2 { class: "section-gap", "Fortschrittsfotos" }
            input {
                r#type: "file",
                accept: "image/*",
                multiple: true,
                onchange: move |evt: FormEvent| {
                    let paths: Vec<PathBuf> = evt.files().iter().map(|file| file.path()).collect();
                    dispatcher.dispatch.call(TrackerIntent::AddPhotos(paths));
                },
            }
            div { class: "photo-grid",
                for (idx, photo) in photos.into_iter().enumerate() {
                    img { key: "{idx}", class: "photo", src: "{photo.src}", alt: "{photo.alt}" }
                }
            }
        }
    }
}
