// Infrastructure layer - Configuration and the reference dataset
pub mod config;
pub mod sensor_dataset;
