// Route table for the JSON API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    create_chart, delete_chart, edit_chart, get_chart, health_check, list_charts, list_sensors,
    patch_chart, seed_charts, view_chart, view_default,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/sensors", get(list_sensors))
        .route("/seed", post(seed_charts))
        .route("/charts", get(list_charts).post(create_chart))
        .route(
            "/charts/:id",
            get(get_chart).put(edit_chart).patch(patch_chart).delete(delete_chart),
        )
        .route("/view", get(view_default))
        .route("/view/:name", get(view_chart))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
