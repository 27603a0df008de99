//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::ApiResponse;

/// Row counts shown on the admin dashboard
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    pub classrooms: i64,
    pub bookings: i64,
    #[serde(rename = "facultyMembers")]
    pub faculty_members: i64,
}

/// Dashboard counts
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "status",
    responses(
        (status = 200, description = "Current counts", body = DashboardStats)
    )
)]
pub async fn dashboard_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let stats = state.services.stats.dashboard().await?;
    Ok(Json(ApiResponse::ok(stats)))
}
