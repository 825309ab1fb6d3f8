mod progress;
mod service;
mod state;

// Public API of the tracker subsystem.
pub use crate::error::TrackerError;
pub use progress::TrackerProgress;
pub use service::TrackerService;
pub use state::TrackerState;
