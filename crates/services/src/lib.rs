#![forbid(unsafe_code)]

pub mod error;
pub mod motivation;
pub mod tracker;

pub use trainer_core::Clock;

pub use error::TrackerError;
pub use motivation::{
    FixedMessageSource, MOTIVATORS, MessageDecision, MessageSource, ThreadRngSource,
    decide_message,
};
pub use tracker::{TrackerProgress, TrackerService, TrackerState};
