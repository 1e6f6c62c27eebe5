// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartService;
use crate::application::view_service::ChartViewService;
use crate::domain::registry::ChartRegistry;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::sensor_dataset::SensorDataset;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Reference dataset (infrastructure layer)
    let sensors = Arc::new(SensorDataset::load(&app_config.dataset.path).await?);

    // One registry per process, shared by both services
    let registry = Arc::new(RwLock::new(ChartRegistry::new()));

    // Create services (application layer)
    let chart_service = ChartService::new(registry.clone(), sensors);
    let view_service = ChartViewService::new(registry);

    if app_config.dataset.seed_on_startup {
        let count = chart_service.seed_from_sensors().await?;
        tracing::info!("Seeded {} charts from the reference dataset", count);
    }

    // Create application state
    let state = Arc::new(AppState {
        chart_service,
        view_service,
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let listener = app_config.server.bind().await?;
    tracing::info!("Starting sensor-charts service on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
