// Chart view domain model - what the detail page renders
use super::chart::{ChartDefinition, DEFAULT_X_AXIS_LABEL, DEFAULT_Y_AXIS_LABEL};
use super::series::{DataPoint, DateRange};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub id: String,
    pub name: String,
    pub chart_type: String,
    pub color: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub description: String,
    /// Full span of the series; `None` when the series is empty
    pub default_range: Option<DateRange>,
    /// Window actually applied to `points`
    pub range: Option<DateRange>,
    pub points: Vec<DataPoint>,
}

impl ChartView {
    pub fn new(
        chart: &ChartDefinition,
        default_range: Option<DateRange>,
        range: Option<DateRange>,
        points: Vec<DataPoint>,
    ) -> Self {
        Self {
            id: chart.id.clone(),
            name: chart.name.clone(),
            chart_type: chart.chart_type.clone(),
            color: chart.color.clone(),
            x_axis_label: label_or(&chart.x_axis_label, DEFAULT_X_AXIS_LABEL),
            y_axis_label: label_or(&chart.y_axis_label, DEFAULT_Y_AXIS_LABEL),
            description: chart.description.clone(),
            default_range,
            range,
            points,
        }
    }
}

fn label_or(label: &str, fallback: &str) -> String {
    if label.trim().is_empty() {
        fallback.to_string()
    } else {
        label.to_string()
    }
}
