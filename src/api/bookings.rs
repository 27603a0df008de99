//! Booking endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{AvailabilityQuery, Booking, BookingWithOwner, CreateBooking, SlotAvailability},
};

use super::{message_only, ApiPath, ApiQuery, ApiResponse, AuthenticatedUser, ValidatedJson};

/// Book a classroom slot
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Malformed date, slot or smartboard", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Classroom not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Slot already booked", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    state.services.auth.ensure_active(&claims).await?;

    let booking = state.services.bookings.create(&claims, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(booking).with_message("Booking created successfully")),
    ))
}

/// Bookings made by the caller
#[utoipa::path(
    get,
    path = "/api/bookings/mine",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's bookings", body = Vec<Booking>),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn my_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<Booking>>>> {
    state.services.auth.ensure_active(&claims).await?;

    let bookings = state.services.bookings.list_mine(&claims).await?;
    Ok(Json(ApiResponse::list(bookings)))
}

/// Slot availability of a classroom on a date
#[utoipa::path(
    get,
    path = "/api/bookings/availability",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "One entry per bookable slot", body = Vec<SlotAvailability>),
        (status = 400, description = "Malformed date", body = crate::error::ErrorResponse),
        (status = 404, description = "Classroom not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn availability(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiQuery(query): ApiQuery<AvailabilityQuery>,
) -> AppResult<Json<ApiResponse<Vec<SlotAvailability>>>> {
    state.services.auth.ensure_active(&claims).await?;

    let slots = state.services.bookings.availability(&query).await?;
    Ok(Json(ApiResponse::list(slots)))
}

/// Delete a booking (owner or admin)
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted"),
        (status = 403, description = "Not the owner", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<Option<()>>>> {
    state.services.auth.ensure_active(&claims).await?;

    state.services.bookings.delete(&claims, id).await?;
    Ok(Json(message_only("Booking deleted successfully")))
}

/// List every booking with its owner
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingWithOwner>),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_all_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<Vec<BookingWithOwner>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    let bookings = state.services.bookings.list_all().await?;
    Ok(Json(ApiResponse::list(bookings)))
}

/// Delete any booking
#[utoipa::path(
    delete,
    path = "/api/admin/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted"),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse),
        (status = 404, description = "Booking not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn admin_delete_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<ApiResponse<Option<()>>>> {
    claims.require_admin()?;
    state.services.auth.ensure_active(&claims).await?;

    state.services.bookings.delete(&claims, id).await?;
    Ok(Json(message_only("Booking deleted successfully")))
}
