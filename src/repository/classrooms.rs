//! Classrooms repository; smartboards live in a JSONB array on the classroom row

use chrono::Utc;
use sqlx::{types::Json, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::classroom::{Classroom, ClassroomRow, Smartboard, SmartboardStatus},
};

/// Result of [`ClassroomsRepository::append_smartboard`]
#[derive(Debug)]
pub enum SmartboardAppend {
    Added(Classroom),
    Duplicate,
    MissingClassroom,
}

#[derive(Clone)]
pub struct ClassroomsRepository {
    pool: Pool<Postgres>,
}

impl ClassroomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get classroom by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Classroom> {
        sqlx::query_as::<_, ClassroomRow>("SELECT * FROM classrooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Classroom::from)
            .ok_or_else(|| AppError::NotFound(format!("Classroom with id {} not found", id)))
    }

    /// List all classrooms ordered by branch then label
    pub async fn list(&self) -> AppResult<Vec<Classroom>> {
        let rows = sqlx::query_as::<_, ClassroomRow>("SELECT * FROM classrooms ORDER BY branch, label")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Classroom::from).collect())
    }

    /// List classrooms of one branch (branch must be normalized)
    pub async fn list_by_branch(&self, branch: &str) -> AppResult<Vec<Classroom>> {
        let rows = sqlx::query_as::<_, ClassroomRow>(
            "SELECT * FROM classrooms WHERE branch = $1 ORDER BY label",
        )
        .bind(branch)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Classroom::from).collect())
    }

    /// Insert a classroom; a duplicate (branch, label) surfaces as a conflict
    pub async fn create(&self, branch: &str, label: &str, smartboards: Vec<Smartboard>) -> AppResult<Classroom> {
        let row = sqlx::query_as::<_, ClassroomRow>(
            r#"
            INSERT INTO classrooms (id, branch, label, smartboards)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(branch)
        .bind(label)
        .bind(Json(smartboards))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    /// Find a classroom by (branch, label), creating an empty one when missing
    pub async fn find_or_create(&self, branch: &str, label: &str) -> AppResult<Classroom> {
        sqlx::query(
            r#"
            INSERT INTO classrooms (id, branch, label)
            VALUES ($1, $2, $3)
            ON CONFLICT (branch, label) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(branch)
        .bind(label)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query_as::<_, ClassroomRow>(
            "SELECT * FROM classrooms WHERE branch = $1 AND label = $2",
        )
        .bind(branch)
        .bind(label)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    /// Hard delete. Bookings referencing the classroom are left untouched.
    pub async fn delete(&self, id: Uuid) -> AppResult<Classroom> {
        sqlx::query_as::<_, ClassroomRow>("DELETE FROM classrooms WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Classroom::from)
            .ok_or_else(|| AppError::NotFound(format!("Classroom with id {} not found", id)))
    }

    /// Append a smartboard unless the number is already used in this classroom
    pub async fn append_smartboard(&self, id: Uuid, smartboard: &Smartboard) -> AppResult<SmartboardAppend> {
        let row = sqlx::query_as::<_, ClassroomRow>(
            r#"
            UPDATE classrooms
            SET smartboards = smartboards || jsonb_build_array($2::jsonb),
                updated_at = $3
            WHERE id = $1
              AND NOT EXISTS (
                  SELECT 1 FROM jsonb_array_elements(smartboards) sb
                  WHERE sb->>'number' = $4
              )
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(Json(smartboard))
        .bind(Utc::now())
        .bind(&smartboard.number)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = row {
            return Ok(SmartboardAppend::Added(Classroom::from(row)));
        }

        // No row updated: either the number is taken or the classroom is gone
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM classrooms WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(if exists {
            SmartboardAppend::Duplicate
        } else {
            SmartboardAppend::MissingClassroom
        })
    }

    /// Set the status of one smartboard, keeping the array order
    pub async fn set_smartboard_status(
        &self,
        id: Uuid,
        number: &str,
        status: SmartboardStatus,
    ) -> AppResult<Classroom> {
        sqlx::query_as::<_, ClassroomRow>(
            r#"
            UPDATE classrooms
            SET smartboards = (
                    SELECT jsonb_agg(
                        CASE WHEN sb->>'number' = $2
                             THEN jsonb_set(sb, '{status}', to_jsonb($3::text))
                             ELSE sb
                        END
                        ORDER BY pos
                    )
                    FROM jsonb_array_elements(smartboards) WITH ORDINALITY AS t(sb, pos)
                ),
                updated_at = $4
            WHERE id = $1
              AND EXISTS (
                  SELECT 1 FROM jsonb_array_elements(smartboards) sb
                  WHERE sb->>'number' = $2
              )
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(number)
        .bind(status.as_str())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .map(Classroom::from)
        .ok_or_else(|| {
            AppError::NotFound(format!("Smartboard {} not found in classroom {}", number, id))
        })
    }

    /// Remove one smartboard, keeping the order of the others
    pub async fn remove_smartboard(&self, id: Uuid, number: &str) -> AppResult<Classroom> {
        sqlx::query_as::<_, ClassroomRow>(
            r#"
            UPDATE classrooms
            SET smartboards = COALESCE((
                    SELECT jsonb_agg(sb ORDER BY pos)
                    FROM jsonb_array_elements(smartboards) WITH ORDINALITY AS t(sb, pos)
                    WHERE sb->>'number' <> $2
                ), '[]'::jsonb),
                updated_at = $3
            WHERE id = $1
              AND EXISTS (
                  SELECT 1 FROM jsonb_array_elements(smartboards) sb
                  WHERE sb->>'number' = $2
              )
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(number)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .map(Classroom::from)
        .ok_or_else(|| {
            AppError::NotFound(format!("Smartboard {} not found in classroom {}", number, id))
        })
    }

    /// Distinct branches across classrooms and faculty
    pub async fn distinct_branches(&self) -> AppResult<Vec<String>> {
        let branches: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT branch FROM classrooms
            UNION
            SELECT branch FROM users
            ORDER BY branch
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(branches)
    }

    /// Count classrooms
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM classrooms")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
