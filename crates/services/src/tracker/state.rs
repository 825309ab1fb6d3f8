use trainer_core::model::{
    CompletionMap, GoalWeight, ImageRef, NoteField, Notes, ProgressImages, WeightLog,
    WeightSample, training_a,
};
use trainer_core::{Reminder, goal_progress};

use super::progress::TrackerProgress;
use crate::motivation::{MessageSource, decide_message};

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Everything the page shows for one session.
///
/// Transitions consume the state and return the next one; the UI owns the single
/// live instance and swaps it on every event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    completed: CompletionMap,
    weights: WeightLog,
    goal_input: String,
    goal: GoalWeight,
    message: Option<&'static str>,
    reminder: Reminder,
    notes: Notes,
    images: ProgressImages,
}

impl TrackerState {
    /// Fresh session with nothing logged. The reminder is fixed for the session.
    #[must_use]
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder,
            ..Self::default()
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn toggled(mut self, label: &str) -> Self {
        self.completed.toggle(label);
        self
    }

    /// Append a weigh-in and update the motivator against the sample before it.
    #[must_use]
    pub fn with_weight(mut self, sample: WeightSample, source: &dyn MessageSource) -> Self {
        self.weights.push(sample);
        self.message = decide_message(&self.weights, source).apply(self.message);
        self
    }

    /// Store the goal field exactly as typed; the parsed goal follows it.
    #[must_use]
    pub fn with_goal_input(mut self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        self.goal = GoalWeight::parse(&raw);
        self.goal_input = raw;
        self
    }

    #[must_use]
    pub fn with_note(mut self, field: NoteField, text: impl Into<String>) -> Self {
        self.notes.set(field, text);
        self
    }

    #[must_use]
    pub fn with_images(mut self, images: impl IntoIterator<Item = ImageRef>) -> Self {
        self.images.extend(images);
        self
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn completed(&self) -> &CompletionMap {
        &self.completed
    }

    #[must_use]
    pub fn is_completed(&self, label: &str) -> bool {
        self.completed.is_completed(label)
    }

    #[must_use]
    pub fn weights(&self) -> &WeightLog {
        &self.weights
    }

    #[must_use]
    pub fn goal(&self) -> GoalWeight {
        self.goal
    }

    #[must_use]
    pub fn goal_input(&self) -> &str {
        &self.goal_input
    }

    #[must_use]
    pub fn active_message(&self) -> Option<&'static str> {
        self.message
    }

    #[must_use]
    pub fn reminder(&self) -> Reminder {
        self.reminder
    }

    #[must_use]
    pub fn note(&self, field: NoteField) -> &str {
        self.notes.text(field)
    }

    #[must_use]
    pub fn images(&self) -> &ProgressImages {
        &self.images
    }

    //
    // ─── DERIVED ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn goal_progress(&self) -> f64 {
        goal_progress(self.goal, &self.weights)
    }

    /// The goal indicator only appears once there is both a goal and a weigh-in.
    #[must_use]
    pub fn shows_goal_progress(&self) -> bool {
        self.goal.is_set() && !self.weights.is_empty()
    }

    #[must_use]
    pub fn completion_percent(&self) -> f64 {
        self.completed.completion_percent(training_a())
    }

    #[must_use]
    pub fn progress(&self) -> TrackerProgress {
        let catalog = training_a();
        TrackerProgress {
            exercises_done: self.completed.completed_in(catalog),
            exercises_total: catalog.len(),
            completion_percent: self.completion_percent(),
            goal_percent: self.shows_goal_progress().then(|| self.goal_progress()),
        }
    }
}
