mod checklist;
pub mod guidance;
mod goal;
mod images;
mod notes;
mod weight;

pub use checklist::{CompletionMap, TRAINING_A, training_a};
pub use goal::GoalWeight;
pub use images::{ImageRef, ImageRefError, ProgressImages};
pub use notes::{NoteField, Notes};
pub use weight::{WeightInputError, WeightLog, WeightSample, parse_weight_input};
