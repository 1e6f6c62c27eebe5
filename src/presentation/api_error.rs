// Mapping of service errors to JSON HTTP responses
use crate::application::chart_service::ChartServiceError;
use crate::domain::registry::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    Service(ChartServiceError),
    NotFound(String),
}

impl From<ChartServiceError> for ApiError {
    fn from(err: ChartServiceError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(ChartServiceError::Form(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": errors.to_string(), "fields": errors.fields })),
            )
                .into_response(),
            ApiError::Service(ChartServiceError::Registry(err @ RegistryError::DuplicateId(_))) => {
                (StatusCode::CONFLICT, Json(json!({ "error": err.to_string() }))).into_response()
            }
            ApiError::Service(err) => {
                tracing::error!("Request failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
