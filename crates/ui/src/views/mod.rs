mod actions;
mod components;
mod meal_prep;
mod notes;
mod nutrition;
mod progress;
mod training;
mod weight;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use actions::{TrackerDispatcher, TrackerIntent, WeightDraft, use_tracker_dispatcher};
pub use components::{NoteArea, ProgressBar};
pub use meal_prep::MealPrepView;
pub use notes::NotesView;
pub use nutrition::NutritionView;
pub use progress::ProgressView;
pub use training::TrainingView;
pub use weight::WeightView;
