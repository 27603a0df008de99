//! Administrator accounts service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        admin::{Admin, CreateAdmin, UpdateAdmin},
        user::normalize_email,
    },
    repository::Repository,
    services::auth::hash_password,
};

#[derive(Clone)]
pub struct AdminsService {
    repository: Repository,
}

impl AdminsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Admin>> {
        self.repository.admins.list_active().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Admin> {
        self.repository.admins.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateAdmin) -> AppResult<Admin> {
        let email = normalize_email(&data.email);
        if self.repository.admins.get_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(format!("Admin with email {} already exists", email)));
        }

        let password_hash = hash_password(&data.password)?;
        let admin = self.repository.admins.create(data, &email, &password_hash).await?;
        tracing::info!(admin_id = %admin.id, "Admin created");

        Ok(admin)
    }

    pub async fn update(&self, id: Uuid, data: &UpdateAdmin) -> AppResult<Admin> {
        let password_hash = data.password.as_deref().map(hash_password).transpose()?;
        let admin = self.repository.admins.update(id, data, password_hash).await?;
        tracing::info!(admin_id = %id, "Admin updated");
        Ok(admin)
    }

    /// Soft delete
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Admin> {
        let admin = self.repository.admins.deactivate(id).await?;
        tracing::info!(admin_id = %id, "Admin deactivated");
        Ok(admin)
    }
}
