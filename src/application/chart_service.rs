// Chart service - Use cases for creating, editing and removing charts
use crate::application::sensor_source::SensorSource;
use crate::domain::chart::{ChartDefinition, ChartPatch, DEFAULT_X_AXIS_LABEL, DEFAULT_Y_AXIS_LABEL};
use crate::domain::form::{ChartFormInput, FormErrors, ValidatedForm};
use crate::domain::registry::{ChartRegistry, RegistryError};
use crate::domain::series::DataPoint;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ChartServiceError {
    #[error(transparent)]
    Form(#[from] FormErrors),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct ChartService {
    registry: Arc<RwLock<ChartRegistry>>,
    sensors: Arc<dyn SensorSource>,
}

impl ChartService {
    pub fn new(registry: Arc<RwLock<ChartRegistry>>, sensors: Arc<dyn SensorSource>) -> Self {
        Self { registry, sensors }
    }

    pub async fn list(&self) -> Vec<ChartDefinition> {
        self.registry.read().await.list().to_vec()
    }

    pub async fn search(&self, query: &str) -> Vec<ChartDefinition> {
        let registry = self.registry.read().await;
        let found: Vec<ChartDefinition> = registry.search(query).into_iter().cloned().collect();
        tracing::debug!("Search {:?} matched {} of {} charts", query, found.len(), registry.len());
        found
    }

    pub async fn get(&self, id: &str) -> Option<ChartDefinition> {
        self.registry.read().await.get(id).cloned()
    }

    pub async fn sensor_names(&self) -> anyhow::Result<Vec<String>> {
        self.sensors.sensor_names().await
    }

    /// Validate the form, attach the selected sensor's series and store the
    /// chart under a fresh id.
    pub async fn create(&self, input: ChartFormInput) -> Result<ChartDefinition, ChartServiceError> {
        let form = input.validate()?;
        let series = self.resolve_series(&form.data_source_selection).await?;

        let chart = ChartDefinition::new(
            Uuid::new_v4().to_string(),
            form.name,
            form.chart_type,
            form.color,
            series,
        )
        .with_axis_labels(form.x_axis, form.y_axis)
        .with_description(form.description);

        tracing::info!("Created chart {} ({})", chart.id, chart.name);
        self.registry.write().await.add(chart.clone());
        Ok(chart)
    }

    /// Replace every editable field from the form. An unknown id is ignored.
    pub async fn edit(&self, id: &str, input: ChartFormInput) -> Result<(), ChartServiceError> {
        let form = input.validate()?;
        let series = self.resolve_series(&form.data_source_selection).await?;
        self.patch(id, form_patch(form, series)).await
    }

    /// Validate and merge a partial update. An unknown id is ignored.
    pub async fn patch(&self, id: &str, patch: ChartPatch) -> Result<(), ChartServiceError> {
        let patch = patch.validate()?;
        if patch.is_empty() {
            tracing::debug!("Empty patch for chart {}, nothing to do", id);
            return Ok(());
        }
        if self.registry.write().await.edit(id, patch) {
            tracing::info!("Edited chart {}", id);
        } else {
            tracing::warn!("Ignoring edit of unknown chart {}", id);
        }
        Ok(())
    }

    pub async fn remove(&self, id: &str) {
        if self.registry.write().await.remove(id) {
            tracing::info!("Removed chart {}", id);
        } else {
            tracing::debug!("Remove of unknown chart {} ignored", id);
        }
    }

    pub async fn initialize(&self, charts: Vec<ChartDefinition>) -> Result<(), ChartServiceError> {
        let count = charts.len();
        self.registry.write().await.initialize(charts)?;
        tracing::info!("Initialized registry with {} charts", count);
        Ok(())
    }

    /// One line chart per reference sensor, with the stock labels.
    pub async fn seed_from_sensors(&self) -> Result<usize, ChartServiceError> {
        let charts: Vec<ChartDefinition> = self
            .sensors
            .list_sensors()
            .await?
            .into_iter()
            .map(|sensor| {
                ChartDefinition::new(
                    Uuid::new_v4().to_string(),
                    sensor.name,
                    "Line".to_string(),
                    "Blue".to_string(),
                    sensor.series,
                )
                .with_axis_labels(DEFAULT_X_AXIS_LABEL.to_string(), DEFAULT_Y_AXIS_LABEL.to_string())
            })
            .collect();

        let count = charts.len();
        self.initialize(charts).await?;
        Ok(count)
    }

    async fn resolve_series(&self, selection: &str) -> anyhow::Result<Vec<DataPoint>> {
        match self.sensors.find_sensor(selection).await? {
            Some(sensor) => Ok(sensor.series),
            None => {
                tracing::warn!("Unknown sensor {:?}, chart gets an empty series", selection);
                Ok(Vec::new())
            }
        }
    }
}

fn form_patch(form: ValidatedForm, series: Vec<DataPoint>) -> ChartPatch {
    ChartPatch {
        name: Some(form.name),
        chart_type: Some(form.chart_type),
        color: Some(form.color),
        x_axis_label: Some(form.x_axis),
        y_axis_label: Some(form.y_axis),
        description: Some(form.description),
        series: Some(series),
    }
}
