// Chart definition domain model
use super::series::DataPoint;
use serde::{Deserialize, Serialize};

pub const CHART_TYPES: [&str; 5] = ["Line", "Bar", "Pie", "Scatter", "Area"];
pub const COLORS: [&str; 5] = ["Blue", "Red", "Green", "Orange", "Purple"];

pub const DEFAULT_X_AXIS_LABEL: &str = "Date";
pub const DEFAULT_Y_AXIS_LABEL: &str = "°C";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefinition {
    pub id: String,
    pub name: String,
    pub chart_type: String,
    pub color: String,
    #[serde(default)]
    pub x_axis_label: String,
    #[serde(default)]
    pub y_axis_label: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dataseries", default)]
    pub series: Vec<DataPoint>,
}

impl ChartDefinition {
    pub fn new(
        id: String,
        name: String,
        chart_type: String,
        color: String,
        series: Vec<DataPoint>,
    ) -> Self {
        Self {
            id,
            name,
            chart_type,
            color,
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            description: String::new(),
            series,
        }
    }

    pub fn with_axis_labels(mut self, x_axis_label: String, y_axis_label: String) -> Self {
        self.x_axis_label = x_axis_label;
        self.y_axis_label = y_axis_label;
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// Merge the fields present in `patch`; `id` never changes.
    pub fn apply(&mut self, patch: ChartPatch) {
        let ChartPatch {
            name,
            chart_type,
            color,
            x_axis_label,
            y_axis_label,
            description,
            series,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(chart_type) = chart_type {
            self.chart_type = chart_type;
        }
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(label) = x_axis_label {
            self.x_axis_label = label;
        }
        if let Some(label) = y_axis_label {
            self.y_axis_label = label;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(series) = series {
            self.series = series;
        }
    }
}

/// Partial update of a chart definition. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPatch {
    pub name: Option<String>,
    pub chart_type: Option<String>,
    pub color: Option<String>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "dataseries")]
    pub series: Option<Vec<DataPoint>>,
}

impl ChartPatch {
    #[cfg(test)]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> ChartDefinition {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ChartDefinition::new(
            "c-1".to_string(),
            "Room A".to_string(),
            "Line".to_string(),
            "Blue".to_string(),
            vec![DataPoint::new(21.5, date)],
        )
        .with_axis_labels("Day".to_string(), "°F".to_string())
        .with_description("north wall".to_string())
    }

    #[test]
    fn test_apply_name_only() {
        let mut chart = sample();
        chart.apply(ChartPatch::name("Room B"));

        let mut expected = sample();
        expected.name = "Room B".to_string();
        assert_eq!(chart, expected);
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut chart = sample();
        let patch = ChartPatch::default();
        assert!(patch.is_empty());
        chart.apply(patch);
        assert_eq!(chart, sample());
    }

    #[test]
    fn test_apply_can_clear_optional_text() {
        let mut chart = sample();
        chart.apply(ChartPatch {
            description: Some(String::new()),
            series: Some(Vec::new()),
            ..ChartPatch::default()
        });
        assert_eq!(chart.description, "");
        assert!(chart.series.is_empty());
        assert_eq!(chart.id, "c-1");
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["chartType"], "Line");
        assert_eq!(json["xAxisLabel"], "Day");
        assert_eq!(json["dataseries"][0]["date"], "2024-01-01");
        assert_eq!(json["dataseries"][0]["value"], 21.5);
    }
}
