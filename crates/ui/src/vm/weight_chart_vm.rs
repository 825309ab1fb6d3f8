use trainer_core::model::WeightLog;

use super::number_fmt::format_kg;

pub const CHART_WIDTH: f64 = 100.0;
pub const CHART_HEIGHT: f64 = 60.0;
pub const CHART_PADDING: f64 = 10.0;

/// Headroom added above and below the logged range, in kg.
const Y_MARGIN: f64 = 2.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPointVm {
    pub x: f64,
    pub y: f64,
    pub date_label: String,
    pub weight_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeightChartVm {
    pub points: Vec<ChartPointVm>,
    /// `points` attribute for the SVG polyline.
    pub polyline: String,
    pub y_top_label: String,
    pub y_bottom_label: String,
}

/// Lay out the log in a `CHART_WIDTH` x `CHART_HEIGHT` viewBox.
///
/// Samples are spread evenly left to right in entry order. The y axis spans the
/// logged range plus 2 kg on each side. Returns `None` for an empty log.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn map_weight_chart(log: &WeightLog) -> Option<WeightChartVm> {
    let min = log.min_weight()? - Y_MARGIN;
    let max = log.max_weight()? + Y_MARGIN;
    let range = max - min;

    let inner_w = CHART_WIDTH - 2.0 * CHART_PADDING;
    let inner_h = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let steps = log.len().saturating_sub(1);

    let x_at = |idx: usize| {
        if steps == 0 {
            CHART_WIDTH / 2.0
        } else {
            CHART_PADDING + idx as f64 / steps as f64 * inner_w
        }
    };
    let y_at = |weight: f64| CHART_HEIGHT - CHART_PADDING - (weight - min) / range * inner_h;

    let points: Vec<ChartPointVm> = log
        .iter()
        .enumerate()
        .map(|(idx, sample)| ChartPointVm {
            x: x_at(idx),
            y: y_at(sample.weight()),
            date_label: sample.date_label(),
            weight_label: format_kg(sample.weight()),
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    Some(WeightChartVm {
        points,
        polyline,
        y_top_label: format!("{max:.0}"),
        y_bottom_label: format!("{min:.0}"),
    })
}
