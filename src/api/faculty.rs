//! Faculty endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        classroom::Department,
        user::{ChangePassword, CreateFaculty, User},
    },
};

use super::{message_only, ApiPath, ApiResponse, AuthenticatedUser, ValidatedJson};

/// Current faculty member's profile
#[utoipa::path(
    get,
    path = "/api/faculties/me",
    tag = "faculty",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Faculty profile", body = User),
        (status = 403, description = "Faculty account required", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<User>>> {
    claims.require_faculty_account()?;
    state.services.auth.ensure_active(&claims).await?;

    let user = state.services.faculty.me(claims.sub).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// Change own password
#[utoipa::path(
    put,
    path = "/api/faculties/me/password",
    tag = "faculty",
    security(("bearer_auth" = [])),
    request_body = ChangePassword,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "New password too short", body = crate::error::ErrorResponse),
        (status = 401, description = "Current password is incorrect", body = crate::error::ErrorResponse)
    )
)]
pub async fn change_password(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<ChangePassword>,
) -> AppResult<Json<ApiResponse<Option<()>>>> {
    claims.require_faculty_account()?;
    state.services.auth.ensure_active(&claims).await?;

    state.services.auth.change_password(claims.sub, &request).await?;
    Ok(Json(message_only("Password changed successfully")))
}

/// Branches in use
#[utoipa::path(
    get,
    path = "/api/faculties/branches",
    tag = "faculty",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Distinct branches", body = Vec<Department>)
    )
)]
pub async fn branches(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<Department>>>> {
    state.services.auth.ensure_active(&claims).await?;

    let departments = state.services.faculty.departments().await?;
    Ok(Json(ApiResponse::list(departments)))
}

/// List all faculty
#[utoipa::path(
    get,
    path = "/api/admin/faculty",
    tag = "faculty",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All faculty, active or not", body = Vec<User>),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_faculty(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<User>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let users = state.services.faculty.list().await?;
    Ok(Json(ApiResponse::list(users)))
}

/// Create a faculty member
#[utoipa::path(
    post,
    path = "/api/admin/faculty",
    tag = "faculty",
    security(("bearer_auth" = [])),
    request_body = CreateFaculty,
    responses(
        (status = 201, description = "Faculty created", body = User),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "E-mail already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_faculty(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<CreateFaculty>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let user = state.services.faculty.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(user).with_message("Faculty created successfully")),
    ))
}

/// Deactivate a faculty member
#[utoipa::path(
    delete,
    path = "/api/admin/faculty/{id}",
    tag = "faculty",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Faculty deactivated", body = User),
        (status = 404, description = "Faculty not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn deactivate_faculty(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<User>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let user = state.services.faculty.deactivate(id).await?;
    Ok(Json(ApiResponse::ok(user).with_message("Faculty deactivated successfully")))
}

/// Departments derived from branches in use
#[utoipa::path(
    get,
    path = "/api/admin/departments",
    tag = "faculty",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Departments", body = Vec<Department>),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse)
    )
)]
pub async fn departments(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<Department>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let departments = state.services.faculty.departments().await?;
    Ok(Json(ApiResponse::list(departments)))
}
