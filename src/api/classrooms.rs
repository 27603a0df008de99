//! Classroom endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::classroom::{Classroom, CreateClassroom},
};

use super::{message_only, ApiPath, ApiResponse, AuthenticatedUser, ValidatedJson};

/// Classrooms of a branch
#[utoipa::path(
    get,
    path = "/api/classrooms/{branch}",
    tag = "classrooms",
    security(("bearer_auth" = [])),
    params(("branch" = String, Path, description = "Branch code, case-insensitive")),
    responses(
        (status = 200, description = "Classrooms of the branch", body = Vec<Classroom>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_by_branch(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(branch): ApiPath<String>,
) -> AppResult<Json<ApiResponse<Vec<Classroom>>>> {
    state.services.auth.ensure_active(&claims).await?;

    let classrooms = state.services.classrooms.list_by_branch(&branch).await?;
    Ok(Json(ApiResponse::list(classrooms)))
}

/// List all classrooms
#[utoipa::path(
    get,
    path = "/api/admin/classrooms",
    tag = "classrooms",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All classrooms", body = Vec<Classroom>),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_classrooms(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<Classroom>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let classrooms = state.services.classrooms.list().await?;
    Ok(Json(ApiResponse::list(classrooms)))
}

/// Create a classroom
#[utoipa::path(
    post,
    path = "/api/admin/classrooms",
    tag = "classrooms",
    security(("bearer_auth" = [])),
    request_body = CreateClassroom,
    responses(
        (status = 201, description = "Classroom created", body = Classroom),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Classroom already exists in the branch", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_classroom(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<CreateClassroom>,
) -> AppResult<(StatusCode, Json<ApiResponse<Classroom>>)> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let classroom = state.services.classrooms.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(classroom).with_message("Classroom created successfully")),
    ))
}

/// Delete a classroom; its bookings are kept
#[utoipa::path(
    delete,
    path = "/api/admin/classrooms/{id}",
    tag = "classrooms",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Classroom ID")),
    responses(
        (status = 200, description = "Classroom deleted"),
        (status = 404, description = "Classroom not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_classroom(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<Option<()>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    state.services.classrooms.delete(id).await?;
    Ok(Json(message_only("Classroom deleted successfully")))
}
