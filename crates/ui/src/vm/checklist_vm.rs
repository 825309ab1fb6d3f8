use services::TrackerState;
use trainer_core::model::training_a;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseRowVm {
    pub label: &'static str,
    pub done: bool,
    pub action_label: &'static str,
}

impl ExerciseRowVm {
    #[must_use]
    pub fn new(label: &'static str, done: bool) -> Self {
        Self {
            label,
            done,
            action_label: if done { "Rückgängig" } else { "Erledigt" },
        }
    }
}

#[must_use]
pub fn map_exercise_rows(state: &TrackerState) -> Vec<ExerciseRowVm> {
    training_a()
        .iter()
        .map(|&label| ExerciseRowVm::new(label, state.is_completed(label)))
        .collect()
}
