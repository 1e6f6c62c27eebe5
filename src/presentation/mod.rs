// Presentation layer - JSON HTTP API
pub mod api_error;
pub mod app_state;
pub mod handlers;
pub mod routes;
