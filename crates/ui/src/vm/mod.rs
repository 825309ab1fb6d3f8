mod checklist_vm;
mod number_fmt;
mod weight_chart_vm;

pub use checklist_vm::{ExerciseRowVm, map_exercise_rows};
pub use number_fmt::{format_kg, format_percent};
pub use weight_chart_vm::{
    CHART_HEIGHT, CHART_PADDING, CHART_WIDTH, ChartPointVm, WeightChartVm, map_weight_chart,
};
