//! Business logic services

pub mod admins;
pub mod auth;
pub mod bookings;
pub mod classrooms;
pub mod faculty;
pub mod stats;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub bookings: bookings::BookingsService,
    pub classrooms: classrooms::ClassroomsService,
    pub faculty: faculty::FacultyService,
    pub admins: admins::AdminsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            classrooms: classrooms::ClassroomsService::new(repository.clone()),
            faculty: faculty::FacultyService::new(repository.clone(), auth_config),
            admins: admins::AdminsService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
