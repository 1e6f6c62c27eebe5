// Source trait for the read-only reference sensor dataset
use crate::domain::sensor::Sensor;
use async_trait::async_trait;

#[async_trait]
pub trait SensorSource: Send + Sync {
    /// All sensors, in dataset order
    async fn list_sensors(&self) -> anyhow::Result<Vec<Sensor>>;

    /// Sensor with exactly this name, if any
    async fn find_sensor(&self, name: &str) -> anyhow::Result<Option<Sensor>> {
        let sensors = self.list_sensors().await?;
        Ok(sensors.into_iter().find(|s| s.name == name))
    }

    /// Names for the "pick an existing sensor" selector
    async fn sensor_names(&self) -> anyhow::Result<Vec<String>> {
        let sensors = self.list_sensors().await?;
        Ok(sensors.into_iter().map(|s| s.name).collect())
    }
}
