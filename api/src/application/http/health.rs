use axum::{Router, extract::State, routing::get};
use catalog_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness",
    responses(
        (status = 200, body = HealthResponse),
        (status = 500, description = "The database did not answer"),
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        response_time_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 500, description = "The database did not answer"),
    ),
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;
    Ok(Response::OK(status))
}

#[derive(OpenApi)]
#[openapi(paths(health, readiness))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health"), get(health))
        .route(&format!("{root_path}/health/ready"), get(readiness))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use super::*;
    use crate::application::http::server::test_support::test_state;

    #[tokio::test]
    async fn test_unreachable_database_is_reported() {
        let state = test_state();
        let server = TestServer::new(health_routes("/api").with_state(state)).unwrap();

        let response = server.get("/api/health").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Internal server error" })
        );
    }
}
