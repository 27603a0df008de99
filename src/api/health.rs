//! Health and system status endpoints

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiResponse;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    /// Allowed CORS origins
    pub cors_origins: Vec<String>,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct SystemStatus {
    /// "Connected" or "Disconnected", from a live query
    pub database: String,
    pub api: String,
    pub cors: String,
    pub environment: String,
}

/// Liveness endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn root(State(state): State<crate::AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        service: "smartboard-booking".to_string(),
        timestamp: Utc::now(),
        environment: state.config.environment.clone(),
        cors_origins: state.config.cors.resolved_origins().into_iter().collect(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// System status (checks database connectivity)
#[utoipa::path(
    get,
    path = "/api/system/status",
    tag = "status",
    responses(
        (status = 200, description = "Component status", body = SystemStatus)
    )
)]
pub async fn system_status(State(state): State<crate::AppState>) -> Json<ApiResponse<SystemStatus>> {
    let database = if state.services.stats.database_reachable().await {
        "Connected"
    } else {
        "Disconnected"
    };

    let cors = if state.config.is_development() && state.config.cors.permissive_in_development {
        "Enabled (any origin)"
    } else {
        "Enabled"
    };

    Json(ApiResponse::ok(SystemStatus {
        database: database.to_string(),
        api: "Responding".to_string(),
        cors: cors.to_string(),
        environment: state.config.environment.clone(),
    }))
}
