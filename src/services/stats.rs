//! Dashboard statistics service

use crate::{api::stats::DashboardStats, error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Row counts of classrooms, bookings and faculty at call time
    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let (classrooms, bookings, faculty_members) = tokio::try_join!(
            self.repository.classrooms.count(),
            self.repository.bookings.count(),
            self.repository.users.count(),
        )?;

        Ok(DashboardStats {
            classrooms,
            bookings,
            faculty_members,
        })
    }

    /// Whether the database answers a trivial query
    pub async fn database_reachable(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        }
    }
}
