//! Classroom and smartboard management service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        classroom::{
            build_smartboards, AddSmartboard, Classroom, CreateClassroom, Smartboard, SmartboardStatus,
            SmartboardView,
        },
        user::normalize_branch,
    },
    repository::{classrooms::SmartboardAppend, Repository},
};

#[derive(Clone)]
pub struct ClassroomsService {
    repository: Repository,
}

impl ClassroomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Classrooms of one branch, case-insensitive
    pub async fn list_by_branch(&self, branch: &str) -> AppResult<Vec<Classroom>> {
        self.repository.classrooms.list_by_branch(&normalize_branch(branch)).await
    }

    pub async fn list(&self) -> AppResult<Vec<Classroom>> {
        self.repository.classrooms.list().await
    }

    pub async fn create(&self, data: &CreateClassroom) -> AppResult<Classroom> {
        let branch = normalize_branch(&data.branch);
        let label = data.label.trim();
        if branch.is_empty() || label.is_empty() {
            return Err(AppError::Validation("Branch and classroom label are required".to_string()));
        }
        let smartboards = build_smartboards(&data.smartboards)?;

        let classroom = self
            .repository
            .classrooms
            .create(&branch, label, smartboards)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => {
                    AppError::Conflict(format!("Classroom {} already exists in {}", label, branch))
                }
                other => other,
            })?;

        tracing::info!(classroom_id = %classroom.id, branch = %classroom.branch, label = %classroom.label, "Classroom created");
        Ok(classroom)
    }

    /// Hard delete; existing bookings for the classroom are kept
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let classroom = self.repository.classrooms.delete(id).await?;
        tracing::info!(classroom_id = %id, label = %classroom.label, "Classroom deleted");
        Ok(())
    }

    /// Every smartboard with its classroom
    pub async fn list_smartboards(&self) -> AppResult<Vec<SmartboardView>> {
        let classrooms = self.repository.classrooms.list().await?;
        Ok(SmartboardView::flatten(&classrooms))
    }

    /// Add a smartboard, creating its classroom when missing
    pub async fn add_smartboard(&self, data: &AddSmartboard) -> AppResult<SmartboardView> {
        let branch = normalize_branch(&data.department);
        let label = data.room.trim();
        let number = data.number.trim();
        if branch.is_empty() || label.is_empty() || number.is_empty() {
            return Err(AppError::Validation(
                "Smartboard number, room and department are required".to_string(),
            ));
        }

        let classroom = self.repository.classrooms.find_or_create(&branch, label).await?;
        let smartboard = Smartboard {
            number: number.to_string(),
            status: SmartboardStatus::Available,
        };

        let outcome = self.repository.classrooms.append_smartboard(classroom.id, &smartboard).await?;
        let updated = appended_classroom(outcome, classroom.id, number, label)?;

        tracing::info!(classroom_id = %updated.id, number = %number, "Smartboard added");

        Ok(SmartboardView {
            classroom_id: updated.id,
            number: smartboard.number,
            status: smartboard.status,
            room: updated.label,
            department: updated.branch,
        })
    }

    pub async fn update_smartboard_status(
        &self,
        classroom_id: Uuid,
        number: &str,
        status: SmartboardStatus,
    ) -> AppResult<Classroom> {
        let classroom = self
            .repository
            .classrooms
            .set_smartboard_status(classroom_id, number, status)
            .await?;
        tracing::info!(classroom_id = %classroom_id, number = %number, status = status.as_str(), "Smartboard status updated");
        Ok(classroom)
    }

    pub async fn remove_smartboard(&self, classroom_id: Uuid, number: &str) -> AppResult<Classroom> {
        let classroom = self.repository.classrooms.remove_smartboard(classroom_id, number).await?;
        tracing::info!(classroom_id = %classroom_id, number = %number, "Smartboard removed");
        Ok(classroom)
    }
}

fn appended_classroom(outcome: SmartboardAppend, id: Uuid, number: &str, label: &str) -> AppResult<Classroom> {
    match outcome {
        SmartboardAppend::Added(classroom) => Ok(classroom),
        SmartboardAppend::Duplicate => Err(AppError::Conflict(format!(
            "Smartboard {} already exists in classroom {}",
            number, label
        ))),
        SmartboardAppend::MissingClassroom => {
            Err(AppError::NotFound(format!("Classroom with id {} not found", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn classroom(id: Uuid) -> Classroom {
        Classroom {
            id,
            branch: "CSE".to_string(),
            label: "207".to_string(),
            smartboards: vec![Smartboard {
                number: "SB-1".to_string(),
                status: SmartboardStatus::Available,
            }],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_appended_classroom_outcomes() {
        let id = Uuid::new_v4();

        let added = appended_classroom(SmartboardAppend::Added(classroom(id)), id, "SB-1", "207").unwrap();
        assert_eq!(added.id, id);

        assert!(matches!(
            appended_classroom(SmartboardAppend::Duplicate, id, "SB-1", "207"),
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            appended_classroom(SmartboardAppend::MissingClassroom, id, "SB-1", "207"),
            Err(AppError::NotFound(_))
        ));
    }
}
