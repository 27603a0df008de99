//! Login endpoints for faculty and administrators

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{admin::Admin, user::User},
};

use super::{ApiResponse, ValidatedJson};

/// Login request
#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Faculty login payload
#[derive(Serialize, ToSchema)]
pub struct FacultyLoginResponse {
    pub token: String,
    pub user: User,
}

/// Admin login payload
#[derive(Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: Admin,
}

/// Faculty login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = FacultyLoginResponse),
        (status = 400, description = "Missing e-mail or password", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials or deactivated account", body = crate::error::ErrorResponse)
    )
)]
pub async fn faculty_login(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<FacultyLoginResponse>>> {
    let (token, user) = state
        .services
        .auth
        .authenticate_faculty(&request.email, &request.password)
        .await?;

    Ok(Json(
        ApiResponse::ok(FacultyLoginResponse { token, user }).with_message("Login successful"),
    ))
}

/// Administrator login
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid credentials or deactivated account", body = crate::error::ErrorResponse)
    )
)]
pub async fn admin_login(
    State(state): State<crate::AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AdminLoginResponse>>> {
    let (token, admin) = state
        .services
        .auth
        .authenticate_admin(&request.email, &request.password)
        .await?;

    Ok(Json(
        ApiResponse::ok(AdminLoginResponse { token, admin }).with_message("Login successful"),
    ))
}
