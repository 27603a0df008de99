//! Smartboard endpoints (admin)

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::classroom::{AddSmartboard, Classroom, SmartboardView, UpdateSmartboardStatus},
};

use super::{ApiPath, ApiResponse, AuthenticatedUser, ValidatedJson};

/// List every smartboard with its classroom
#[utoipa::path(
    get,
    path = "/api/admin/smartboards",
    tag = "smartboards",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All smartboards", body = Vec<SmartboardView>),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_smartboards(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<SmartboardView>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let smartboards = state.services.classrooms.list_smartboards().await?;
    Ok(Json(ApiResponse::list(smartboards)))
}

/// Add a smartboard to a classroom, creating the classroom if needed
#[utoipa::path(
    post,
    path = "/api/admin/smartboards",
    tag = "smartboards",
    security(("bearer_auth" = [])),
    request_body = AddSmartboard,
    responses(
        (status = 201, description = "Smartboard added", body = SmartboardView),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Smartboard number already used in the classroom", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_smartboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<AddSmartboard>,
) -> AppResult<(StatusCode, Json<ApiResponse<SmartboardView>>)> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let smartboard = state.services.classrooms.add_smartboard(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(smartboard).with_message("Smartboard added successfully")),
    ))
}

/// Change the status of a smartboard
#[utoipa::path(
    put,
    path = "/api/admin/smartboards/{classroom_id}/{number}",
    tag = "smartboards",
    security(("bearer_auth" = [])),
    params(
        ("classroom_id" = Uuid, Path, description = "Classroom ID"),
        ("number" = String, Path, description = "Smartboard number")
    ),
    request_body = UpdateSmartboardStatus,
    responses(
        (status = 200, description = "Status updated", body = Classroom),
        (status = 404, description = "Classroom or smartboard not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_smartboard_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath((classroom_id, number)): ApiPath<(Uuid, String)>,
    ValidatedJson(request): ValidatedJson<UpdateSmartboardStatus>,
) -> AppResult<Json<ApiResponse<Classroom>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let classroom = state
        .services
        .classrooms
        .update_smartboard_status(classroom_id, &number, request.status)
        .await?;
    Ok(Json(ApiResponse::ok(classroom).with_message("Smartboard status updated")))
}

/// Remove a smartboard from its classroom
#[utoipa::path(
    delete,
    path = "/api/admin/smartboards/{classroom_id}/{number}",
    tag = "smartboards",
    security(("bearer_auth" = [])),
    params(
        ("classroom_id" = Uuid, Path, description = "Classroom ID"),
        ("number" = String, Path, description = "Smartboard number")
    ),
    responses(
        (status = 200, description = "Smartboard removed", body = Classroom),
        (status = 404, description = "Classroom or smartboard not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_smartboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath((classroom_id, number)): ApiPath<(Uuid, String)>,
) -> AppResult<Json<ApiResponse<Classroom>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let classroom = state
        .services
        .classrooms
        .remove_smartboard(classroom_id, &number)
        .await?;
    Ok(Json(ApiResponse::ok(classroom).with_message("Smartboard removed successfully")))
}
