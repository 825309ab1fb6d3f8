use crate::model::{GoalWeight, WeightLog};

/// Distance travelled from the first logged weight towards the goal, in percent.
///
/// Returns `0.0` when no goal is set or nothing has been logged yet. Once the latest
/// weight is at or below the goal the result is `100.0`. The result is always within
/// `0.0..=100.0`.
///
/// When the first sample already sits on the goal there is no distance to travel:
/// the result is `100.0` if the latest weight is at or below the goal and `0.0`
/// otherwise.
#[must_use]
pub fn goal_progress(goal: GoalWeight, log: &WeightLog) -> f64 {
    let (Some(goal), Some(first), Some(current)) = (goal.value(), log.first(), log.latest())
    else {
        return 0.0;
    };
    let first = first.weight();
    let current = current.weight();

    if goal >= current {
        return 100.0;
    }

    let span = first - goal;
    if span == 0.0 {
        return 0.0;
    }

    let progress = (1.0 - (current - goal) / span) * 100.0;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}
