// Chart form input and validation
use super::chart::{ChartPatch, CHART_TYPES, COLORS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// What the create/edit dialog submits.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chart_type: String,
    #[serde(default)]
    pub color: String,
    /// Name of the reference sensor whose series the chart displays
    #[serde(default)]
    pub data_source_selection: String,
    #[serde(default)]
    pub x_axis: String,
    #[serde(default)]
    pub y_axis: String,
    #[serde(default)]
    pub description: String,
}

/// Form that passed validation; required fields are non-blank and trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub name: String,
    pub chart_type: String,
    pub color: String,
    pub data_source_selection: String,
    pub x_axis: String,
    pub y_axis: String,
    pub description: String,
}

/// Per-field validation messages, keyed by the form's field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Error)]
#[error("invalid chart form: {} field(s) rejected", .fields.len())]
pub struct FormErrors {
    pub fields: BTreeMap<&'static str, String>,
}

impl FormErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ChartFormInput {
    pub fn validate(self) -> Result<ValidatedForm, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required(&self.name, "name", "Chart name is required", &mut errors);
        let chart_type = required(&self.chart_type, "chartType", "Chart type is required", &mut errors);
        let color = required(&self.color, "color", "Color is required", &mut errors);
        let data_source_selection = required(
            &self.data_source_selection,
            "dataSourceSelection",
            "Dataseries is required",
            &mut errors,
        );

        check_chart_type(&chart_type, &mut errors);
        check_color(&color, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedForm {
            name,
            chart_type,
            color,
            data_source_selection,
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            description: self.description,
        })
    }
}

impl ChartPatch {
    /// Apply the form rules to the fields the patch sets. Required text is
    /// trimmed; unset fields are not checked.
    pub fn validate(mut self) -> Result<ChartPatch, FormErrors> {
        let mut errors = FormErrors::default();

        if let Some(name) = self.name.take() {
            self.name = Some(required(&name, "name", "Chart name is required", &mut errors));
        }
        if let Some(chart_type) = self.chart_type.take() {
            let chart_type = required(&chart_type, "chartType", "Chart type is required", &mut errors);
            check_chart_type(&chart_type, &mut errors);
            self.chart_type = Some(chart_type);
        }
        if let Some(color) = self.color.take() {
            let color = required(&color, "color", "Color is required", &mut errors);
            check_color(&color, &mut errors);
            self.color = Some(color);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self)
    }
}

fn check_chart_type(chart_type: &str, errors: &mut FormErrors) {
    if !chart_type.is_empty() && !CHART_TYPES.contains(&chart_type) {
        errors.push(
            "chartType",
            format!("Chart type must be one of {}", CHART_TYPES.join(", ")),
        );
    }
}

fn check_color(color: &str, errors: &mut FormErrors) {
    if !color.is_empty() && !COLORS.contains(&color) {
        errors.push("color", format!("Color must be one of {}", COLORS.join(", ")));
    }
}

fn required(
    value: &str,
    field: &'static str,
    message: &str,
    errors: &mut FormErrors,
) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
    }
    trimmed.to_string()
}
