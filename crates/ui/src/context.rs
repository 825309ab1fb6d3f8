use std::sync::Arc;

use services::{TrackerService, TrackerState};

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn tracker(&self) -> Arc<TrackerService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    tracker: Arc<TrackerService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            tracker: app.tracker(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }

    /// The state a freshly opened page starts from.
    #[must_use]
    pub fn start_session(&self) -> TrackerState {
        self.tracker.start_session()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
