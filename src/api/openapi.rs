//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admins, auth, bookings, classrooms, faculty, health, smartboards, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smartboard Booking API",
        version = "1.0.0",
        description = "Classroom and smartboard booking REST API"
    ),
    paths(
        // Status
        health::root,
        health::system_status,
        stats::dashboard_stats,
        // Auth
        auth::faculty_login,
        auth::admin_login,
        // Classrooms
        classrooms::list_by_branch,
        classrooms::list_classrooms,
        classrooms::create_classroom,
        classrooms::delete_classroom,
        // Smartboards
        smartboards::list_smartboards,
        smartboards::add_smartboard,
        smartboards::update_smartboard_status,
        smartboards::remove_smartboard,
        // Bookings
        bookings::create_booking,
        bookings::my_bookings,
        bookings::availability,
        bookings::delete_booking,
        bookings::list_all_bookings,
        bookings::admin_delete_booking,
        // Faculty
        faculty::me,
        faculty::change_password,
        faculty::branches,
        faculty::list_faculty,
        faculty::create_faculty,
        faculty::deactivate_faculty,
        faculty::departments,
        // Admin accounts
        admins::list_admins,
        admins::get_admin,
        admins::create_admin,
        admins::update_admin,
        admins::deactivate_admin,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::FacultyLoginResponse,
            auth::AdminLoginResponse,
            // Identities
            crate::models::user::User,
            crate::models::user::Role,
            crate::models::user::AccountKind,
            crate::models::user::CreateFaculty,
            crate::models::user::ChangePassword,
            crate::models::admin::Admin,
            crate::models::admin::CreateAdmin,
            crate::models::admin::UpdateAdmin,
            // Classrooms
            crate::models::classroom::Classroom,
            crate::models::classroom::Smartboard,
            crate::models::classroom::SmartboardStatus,
            crate::models::classroom::SmartboardView,
            crate::models::classroom::CreateClassroom,
            crate::models::classroom::AddSmartboard,
            crate::models::classroom::UpdateSmartboardStatus,
            crate::models::classroom::Department,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingWithOwner,
            crate::models::booking::CreateBooking,
            crate::models::booking::SlotAvailability,
            // Status
            health::HealthResponse,
            health::SystemStatus,
            stats::DashboardStats,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "status", description = "Health, status and dashboard endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "classrooms", description = "Classroom management"),
        (name = "smartboards", description = "Smartboard management"),
        (name = "bookings", description = "Classroom slot bookings"),
        (name = "faculty", description = "Faculty management"),
        (name = "admins", description = "Administrator accounts")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_booking_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/bookings"));
        assert!(doc.paths.paths.contains_key("/api/admin/smartboards/{classroom_id}/{number}"));
    }
}
