//! Administrator account endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::admin::{Admin, CreateAdmin, UpdateAdmin},
};

use super::{ApiPath, ApiResponse, AuthenticatedUser, ValidatedJson};

/// List active administrators
#[utoipa::path(
    get,
    path = "/api/admin/accounts",
    tag = "admins",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active administrators", body = Vec<Admin>),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_admins(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<Admin>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let admins = state.services.admins.list().await?;
    Ok(Json(ApiResponse::list(admins)))
}

/// Get an administrator
#[utoipa::path(
    get,
    path = "/api/admin/accounts/{id}",
    tag = "admins",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Administrator", body = Admin),
        (status = 404, description = "Admin not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_admin(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<Admin>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let admin = state.services.admins.get(id).await?;
    Ok(Json(ApiResponse::ok(admin)))
}

/// Create an administrator
#[utoipa::path(
    post,
    path = "/api/admin/accounts",
    tag = "admins",
    security(("bearer_auth" = [])),
    request_body = CreateAdmin,
    responses(
        (status = 201, description = "Admin created", body = Admin),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "E-mail already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_admin(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<CreateAdmin>,
) -> AppResult<(StatusCode, Json<ApiResponse<Admin>>)> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let admin = state.services.admins.create(&request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(admin).with_message("Admin created successfully")),
    ))
}

/// Update an administrator
#[utoipa::path(
    put,
    path = "/api/admin/accounts/{id}",
    tag = "admins",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Admin ID")),
    request_body = UpdateAdmin,
    responses(
        (status = 200, description = "Admin updated", body = Admin),
        (status = 404, description = "Admin not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_admin(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateAdmin>,
) -> AppResult<Json<ApiResponse<Admin>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let admin = state.services.admins.update(id, &request).await?;
    Ok(Json(ApiResponse::ok(admin).with_message("Admin updated successfully")))
}

/// Deactivate an administrator
#[utoipa::path(
    delete,
    path = "/api/admin/accounts/{id}",
    tag = "admins",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin deactivated", body = Admin),
        (status = 404, description = "Admin not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn deactivate_admin(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<Admin>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let admin = state.services.admins.deactivate(id).await?;
    Ok(Json(ApiResponse::ok(admin).with_message("Admin deactivated successfully")))
}
