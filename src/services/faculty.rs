//! Faculty management service

use uuid::Uuid;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        classroom::Department,
        user::{normalize_branch, normalize_email, CreateFaculty, NewUser, Role, User},
    },
    repository::Repository,
    services::auth::hash_password,
};

/// Branch spellings that map to a canonical code
const BRANCH_ALIASES: &[(&str, &str)] = &[("AI & ML", "AIML"), ("AI&ML", "AIML")];

/// Canonical branch code: aliases resolved, trimmed and upper-cased
pub fn canonical_branch(branch: &str) -> String {
    let normalized = normalize_branch(branch);
    BRANCH_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, code)| code.to_string())
        .unwrap_or(normalized)
}

#[derive(Clone)]
pub struct FacultyService {
    repository: Repository,
    config: AuthConfig,
}

impl FacultyService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// The caller's own record
    pub async fn me(&self, user_id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(user_id).await
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Build a normalized record, hashing the given or the default password
    pub fn prepare(&self, data: &CreateFaculty) -> AppResult<NewUser> {
        let password = data
            .password
            .as_deref()
            .unwrap_or(&self.config.default_faculty_password);

        Ok(NewUser {
            name: data.name.trim().to_string(),
            email: normalize_email(&data.email),
            password_hash: hash_password(password)?,
            branch: canonical_branch(&data.branch),
            phone: data
                .phone
                .as_ref()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            role: data.role.unwrap_or(Role::Faculty),
        })
    }

    pub async fn create(&self, data: &CreateFaculty) -> AppResult<User> {
        let email = normalize_email(&data.email);
        if self.repository.users.email_exists(&email).await? {
            return Err(AppError::Conflict(format!("Faculty with email {} already exists", email)));
        }

        let new_user = self.prepare(data)?;
        let user = self.repository.users.create(&new_user).await?;
        tracing::info!(user_id = %user.id, branch = %user.branch, "Faculty created");

        Ok(user)
    }

    /// Insert unless the e-mail exists; returns whether a row was written
    pub async fn create_if_absent(&self, data: &CreateFaculty) -> AppResult<bool> {
        let new_user = self.prepare(data)?;
        self.repository.users.insert_if_absent(&new_user).await
    }

    /// Soft delete
    pub async fn deactivate(&self, id: Uuid) -> AppResult<User> {
        let user = self.repository.users.deactivate(id).await?;
        tracing::info!(user_id = %id, "Faculty deactivated");
        Ok(user)
    }

    /// Distinct branches in use across classrooms and faculty
    pub async fn departments(&self) -> AppResult<Vec<Department>> {
        let branches = self.repository.classrooms.distinct_branches().await?;
        Ok(branches.into_iter().map(Department::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_branch() {
        assert_eq!(canonical_branch("AI & ML"), "AIML");
        assert_eq!(canonical_branch(" ai & ml "), "AIML");
        assert_eq!(canonical_branch("cse"), "CSE");
        assert_eq!(canonical_branch("ECE"), "ECE");
    }
}
