/// Aggregated view of the derived numbers, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerProgress {
    pub exercises_done: usize,
    pub exercises_total: usize,
    pub completion_percent: f64,
    /// `None` while the goal indicator is hidden (no goal or no weigh-in yet).
    pub goal_percent: Option<f64>,
}
