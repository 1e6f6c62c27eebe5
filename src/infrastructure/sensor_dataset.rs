// JSON reference dataset implementation
use crate::application::sensor_source::SensorSource;
use crate::domain::sensor::Sensor;
use crate::domain::series::DataPoint;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sensor {sensor}: unparseable date {raw:?}")]
    BadDate { sensor: String, raw: String },
}

#[derive(Debug, Deserialize)]
struct SensorRecord {
    name: String,
    #[serde(default)]
    dataseries: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    value: f64,
    date: String,
}

/// Reference dataset held in memory. Loaded once, never written.
#[derive(Debug, Clone, Default)]
pub struct SensorDataset {
    sensors: Vec<Sensor>,
}

impl SensorDataset {
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Self { sensors }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let dataset = Self::from_json(&raw)?;
        tracing::info!(
            "Loaded {} sensors from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<SensorRecord> = serde_json::from_str(raw)?;
        let sensors = records
            .into_iter()
            .map(|record| -> Result<Sensor, DatasetError> {
                let series = record
                    .dataseries
                    .iter()
                    .map(|p| {
                        parse_date(&p.date)
                            .map(|date| DataPoint::new(p.value, date))
                            .ok_or_else(|| DatasetError::BadDate {
                                sensor: record.name.clone(),
                                raw: p.date.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Sensor::new(record.name, series))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(sensors))
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }
}

#[async_trait]
impl SensorSource for SensorDataset {
    async fn list_sensors(&self) -> anyhow::Result<Vec<Sensor>> {
        Ok(self.sensors.clone())
    }

    async fn find_sensor(&self, name: &str) -> anyhow::Result<Option<Sensor>> {
        Ok(self.sensors.iter().find(|s| s.name == name).cloned())
    }
}

/// Calendar date of a dataset timestamp, taken as written (no timezone shift).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
