//! Admin accounts repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::admin::{Admin, CreateAdmin, UpdateAdmin},
};

#[derive(Clone)]
pub struct AdminsRepository {
    pool: Pool<Postgres>,
}

impl AdminsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get admin by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Admin with id {} not found", id)))
    }

    /// Active flag of an account, `None` when the row does not exist
    pub async fn is_active(&self, id: Uuid) -> AppResult<Option<bool>> {
        let active: Option<bool> = sqlx::query_scalar("SELECT is_active FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(active)
    }

    /// Get admin by e-mail (case-insensitive)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(admin)
    }

    /// List active admins, newest first
    pub async fn list_active(&self) -> AppResult<Vec<Admin>> {
        let admins = sqlx::query_as::<_, Admin>(
            "SELECT * FROM admins WHERE is_active = TRUE ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(admins)
    }

    /// Create an admin; `email` must already be normalized
    pub async fn create(&self, data: &CreateAdmin, email: &str, password_hash: &str) -> AppResult<Admin> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (id, admin_id, name, email, password_hash, position, branch)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.admin_id)
        .bind(data.name.trim())
        .bind(email)
        .bind(password_hash)
        .bind(&data.position)
        .bind(&data.branch)
        .fetch_one(&self.pool)
        .await?;
        Ok(admin)
    }

    /// Update an admin
    pub async fn update(&self, id: Uuid, data: &UpdateAdmin, password_hash: Option<String>) -> AppResult<Admin> {
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.admin_id, "admin_id");
        add_field!(data.name, "name");
        add_field!(data.position, "position");
        add_field!(data.branch, "branch");
        add_field!(password_hash, "password_hash");

        let query = format!("UPDATE admins SET {} WHERE id = ${} RETURNING *", sets.join(", "), idx);

        let mut builder = sqlx::query_as::<_, Admin>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.admin_id);
        bind_field!(data.name);
        bind_field!(data.position);
        bind_field!(data.branch);
        bind_field!(password_hash);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Admin with id {} not found", id)))
    }

    /// Soft delete
    pub async fn deactivate(&self, id: Uuid) -> AppResult<Admin> {
        sqlx::query_as::<_, Admin>(
            "UPDATE admins SET is_active = FALSE, updated_at = $1 WHERE id = $2 RETURNING *",
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Admin with id {} not found", id)))
    }

    /// Record a successful login
    pub async fn touch_last_login(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE admins SET last_login = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
