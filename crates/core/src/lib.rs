#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;
pub mod reminder;
pub mod time;

pub use error::Error;
pub use progress::goal_progress;
pub use reminder::{Reminder, select_reminder};
pub use time::Clock;
