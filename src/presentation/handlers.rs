// HTTP request handlers
use crate::application::chart_service::ChartServiceError;
use crate::domain::chart::{ChartDefinition, ChartPatch};
use crate::domain::form::ChartFormInput;
use crate::domain::view::ChartView;
use crate::presentation::api_error::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Names of the reference sensors a chart can be built from
pub async fn list_sensors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let names = state
        .chart_service
        .sensor_names()
        .await
        .map_err(ChartServiceError::from)?;
    Ok(Json(names))
}

/// List charts, optionally narrowed by a name search
pub async fn list_charts(
    Query(query): Query<ListQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ChartDefinition>> {
    let charts = match query.search.as_deref() {
        Some(search) => state.chart_service.search(search).await,
        None => state.chart_service.list().await,
    };
    Json(charts)
}

pub async fn create_chart(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ChartFormInput>,
) -> Result<(StatusCode, Json<ChartDefinition>), ApiError> {
    let chart = state.chart_service.create(input).await?;
    Ok((StatusCode::CREATED, Json(chart)))
}

/// Replace the registry with one chart per reference sensor
pub async fn seed_charts(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let count = state.chart_service.seed_from_sensors().await?;
    Ok(Json(json!({ "count": count })))
}

pub async fn get_chart(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartDefinition>, ApiError> {
    state
        .chart_service
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("chart {} not found", id)))
}

/// Edit from the full form. Unknown ids are accepted and ignored.
pub async fn edit_chart(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<ChartFormInput>,
) -> Result<StatusCode, ApiError> {
    state.chart_service.edit(&id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch_chart(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ChartPatch>,
) -> Result<StatusCode, ApiError> {
    state.chart_service.patch(&id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_chart(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    state.chart_service.remove(&id).await;
    StatusCode::NO_CONTENT
}

/// Detail view of the first chart
pub async fn view_default(
    Query(range): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartView>, ApiError> {
    render_view(&state, None, range).await
}

/// Detail view by chart name, falling back to the first chart
pub async fn view_chart(
    Path(name): Path<String>,
    Query(range): Query<RangeQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChartView>, ApiError> {
    render_view(&state, Some(&name), range).await
}

async fn render_view(
    state: &AppState,
    name: Option<&str>,
    range: RangeQuery,
) -> Result<Json<ChartView>, ApiError> {
    state
        .view_service
        .view(name, range.start, range.end)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("No charts created yet".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::chart_service::ChartService;
    use crate::application::view_service::ChartViewService;
    use crate::domain::registry::ChartRegistry;
    use crate::domain::sensor::Sensor;
    use crate::domain::series::DataPoint;
    use crate::infrastructure::sensor_dataset::SensorDataset;
    use axum::response::IntoResponse;
    use chrono::Duration;
    use tokio::sync::RwLock;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn state() -> Arc<AppState> {
        let series = (0..5)
            .map(|i| DataPoint::new(18.0 + i as f64, day(1) + Duration::days(i)))
            .collect();
        let sensors = SensorDataset::new(vec![Sensor::new("Room A".to_string(), series)]);
        let registry = Arc::new(RwLock::new(ChartRegistry::new()));
        Arc::new(AppState {
            chart_service: ChartService::new(registry.clone(), Arc::new(sensors)),
            view_service: ChartViewService::new(registry),
        })
    }

    fn form(name: &str) -> ChartFormInput {
        ChartFormInput {
            name: name.to_string(),
            chart_type: "Area".to_string(),
            color: "Orange".to_string(),
            data_source_selection: "Room A".to_string(),
            ..ChartFormInput::default()
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_and_get() {
        let state = state();
        let (status, Json(chart)) = create_chart(State(state.clone()), Json(form("Lab")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(listed) = list_charts(Query(ListQuery::default()), State(state.clone())).await;
        assert_eq!(listed, vec![chart.clone()]);

        let Json(fetched) = get_chart(Path(chart.id.clone()), State(state)).await.unwrap();
        assert_eq!(fetched, chart);
    }

    #[tokio::test]
    async fn test_create_invalid_form_is_422_with_fields() {
        let state = state();
        let response = create_chart(State(state.clone()), Json(ChartFormInput::default()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["fields"]["name"], "Chart name is required");
        assert_eq!(body["fields"]["color"], "Color is required");

        let Json(listed) = list_charts(Query(ListQuery::default()), State(state)).await;
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_is_404() {
        let response = get_chart(Path("nope".to_string()), State(state()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_patch_delete_are_204_even_when_missing() {
        let state = state();
        let status = edit_chart(Path("nope".to_string()), State(state.clone()), Json(form("X")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(
            patch_chart(
                Path("nope".to_string()),
                State(state.clone()),
                Json(ChartPatch::name("Y"))
            )
            .await
            .unwrap(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(
            delete_chart(Path("nope".to_string()), State(state)).await,
            StatusCode::NO_CONTENT
        );
    }

    #[tokio::test]
    async fn test_patch_then_search() {
        let state = state();
        let (_, Json(chart)) = create_chart(State(state.clone()), Json(form("Lab")))
            .await
            .unwrap();
        let (_, Json(office)) = create_chart(State(state.clone()), Json(form("Office")))
            .await
            .unwrap();
        assert_ne!(office.id, chart.id);

        let patch: ChartPatch = serde_json::from_value(json!({ "name": "Server Room" })).unwrap();
        patch_chart(Path(chart.id.clone()), State(state.clone()), Json(patch))
            .await
            .unwrap();

        let query = ListQuery {
            search: Some("room".to_string()),
        };
        let Json(found) = list_charts(Query(query), State(state)).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, chart.id);
        assert_eq!(found[0].chart_type, "Area");
    }

    #[tokio::test]
    async fn test_invalid_patch_is_422_and_keeps_chart() {
        let state = state();
        let (_, Json(chart)) = create_chart(State(state.clone()), Json(form("Lab")))
            .await
            .unwrap();

        let patch: ChartPatch =
            serde_json::from_value(json!({ "name": "", "chartType": "Radar", "color": "Teal" }))
                .unwrap();
        let response = patch_chart(Path(chart.id.clone()), State(state.clone()), Json(patch))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["fields"]["name"], "Chart name is required");
        assert!(body["fields"]["chartType"].is_string());
        assert!(body["fields"]["color"].is_string());

        let Json(fetched) = get_chart(Path(chart.id.clone()), State(state)).await.unwrap();
        assert_eq!(fetched, chart);
    }

    #[tokio::test]
    async fn test_view_without_charts_is_404() {
        let response = view_default(Query(RangeQuery::default()), State(state()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "No charts created yet");
    }

    #[tokio::test]
    async fn test_room_a_end_to_end() {
        let state = state();
        let Json(seeded) = seed_charts(State(state.clone())).await.unwrap();
        assert_eq!(seeded["count"], 1);

        let Json(view) = view_chart(
            Path("Room A".to_string()),
            Query(RangeQuery::default()),
            State(state.clone()),
        )
        .await
        .unwrap();
        assert_eq!(view.points.len(), 5);
        let full = view.default_range.unwrap();
        assert_eq!((full.start, full.end), (day(1), day(5)));

        let narrowed = RangeQuery {
            start: Some(day(2)),
            end: Some(day(4)),
        };
        let Json(view) = view_chart(Path("Room A".to_string()), Query(narrowed), State(state.clone()))
            .await
            .unwrap();
        let dates: Vec<NaiveDate> = view.points.iter().map(|p| p.timestamp).collect();
        assert_eq!(dates, vec![day(2), day(3), day(4)]);

        delete_chart(Path(view.id), State(state.clone())).await;
        let Json(listed) = list_charts(Query(ListQuery::default()), State(state)).await;
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_list_sensors() {
        let Json(names) = list_sensors(State(state())).await.unwrap();
        assert_eq!(names, vec!["Room A".to_string()]);
    }
}
