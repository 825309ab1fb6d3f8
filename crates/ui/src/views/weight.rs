use dioxus::prelude::*;

use crate::app::use_tracker_state;
use crate::views::{ProgressBar, TrackerDispatcher, TrackerIntent, use_tracker_dispatcher};
use crate::vm::{CHART_HEIGHT, CHART_PADDING, CHART_WIDTH, WeightChartVm, map_weight_chart};

#[component]
pub fn WeightView() -> Element {
    let state = use_tracker_state();
    let TrackerDispatcher {
        dispatch,
        weight_input,
    } = use_tracker_dispatcher();

    let (goal_input, goal_percent, message, chart) = {
        let current = state.read();
        (
            current.goal_input().to_string(),
            current.progress().goal_percent,
            current.active_message(),
            map_weight_chart(current.weights()),
        )
    };

    rsx! {
        div { class: "page card",
            h2 { "Gewichtstracker" }
            div { class: "input-row",
                input {
                    class: "text-input",
                    r#type: "number",
                    placeholder: "Gewicht in kg",
                    value: "{weight_input}",
                    oninput: move |evt| dispatch.call(TrackerIntent::SetWeightInput(evt.value())),
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| dispatch.call(TrackerIntent::SubmitWeight),
                    "Speichern"
                }
            }
            div { class: "input-row",
                input {
                    class: "text-input",
                    r#type: "number",
                    placeholder: "Zielgewicht (kg)",
                    value: "{goal_input}",
                    oninput: move |evt| dispatch.call(TrackerIntent::SetGoalInput(evt.value())),
                }
            }
            if let Some(percent) = goal_percent {
                div { class: "stack",
                    span { "Fortschritt zum Zielgewicht:" }
                    ProgressBar { value: percent }
                }
            }
            if let Some(text) = message {
                p { class: "motivator", "{text}" }
            }
            if let Some(chart) = chart {
                WeightChart { chart }
            }
        }
    }
}

#[component]
fn WeightChart(chart: WeightChartVm) -> Element {
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let left = CHART_PADDING;
    let right = CHART_WIDTH - CHART_PADDING;
    let top = CHART_PADDING;
    let bottom = CHART_HEIGHT - CHART_PADDING;
    let label_x = CHART_PADDING - 1.5;
    let first = chart.points.first().cloned();
    let last = chart.points.last().cloned();

    rsx! {
        div { class: "weight-chart-container",
            svg { class: "weight-chart", view_box: "{view_box}",
                line { class: "grid-line", x1: "{left}", y1: "{top}", x2: "{right}", y2: "{top}" }
                line { class: "grid-line", x1: "{left}", y1: "{bottom}", x2: "{right}", y2: "{bottom}" }
                text { class: "axis-label", x: "{label_x}", y: "{top}", text_anchor: "end", "{chart.y_top_label}" }
                text { class: "axis-label", x: "{label_x}", y: "{bottom}", text_anchor: "end", "{chart.y_bottom_label}" }
                polyline { class: "weight-line", points: "{chart.polyline}" }
                for point in chart.points.iter() {
                    circle { class: "weight-point", cx: "{point.x}", cy: "{point.y}", r: "1.2",
                        title { "{point.date_label}: {point.weight_label}" }
                    }
                }
            }
            div { class: "weight-stats-row",
                if let Some(first) = first {
                    div { class: "weight-stat",
                        span { class: "weight-stat-label", "{first.date_label}" }
                        span { class: "weight-stat-val", "{first.weight_label}" }
                    }
                }
                if let Some(last) = last {
                    div { class: "weight-stat",
                        span { class: "weight-stat-label", "Aktuell" }
                        span { class: "weight-stat-val highlight", "{last.weight_label}" }
                    }
                }
            }
        }
    }
}
