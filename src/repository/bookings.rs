//! Bookings repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingWithOwner, NewBooking},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a booking if its (classroom, date, slot) is still free.
    ///
    /// The uniqueness check and the insert are a single statement, so two
    /// concurrent requests for the same slot cannot both succeed. Returns
    /// `None` when the slot is already taken.
    pub async fn try_insert(&self, booking: &NewBooking) -> AppResult<Option<Booking>> {
        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, owner_id, owner_kind, classroom_id, classroom_label,
                smartboard_number, booking_date, time_slot, faculty_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (classroom_id, booking_date, time_slot) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking.owner_id)
        .bind(booking.owner_kind)
        .bind(booking.classroom_id)
        .bind(&booking.classroom_label)
        .bind(&booking.smartboard_number)
        .bind(booking.booking_date)
        .bind(booking.time_slot)
        .bind(&booking.faculty_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(created)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// Bookings created by one identity, most recent date first
    pub async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE owner_id = $1
            ORDER BY booking_date DESC, time_slot ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    /// Every booking with its owner's name and e-mail, owners looked up in
    /// both the faculty and the admin tables
    pub async fn list_all_with_owner(&self) -> AppResult<Vec<BookingWithOwner>> {
        let bookings = sqlx::query_as::<_, BookingWithOwner>(
            r#"
            SELECT b.*,
                   COALESCE(u.name, a.name) AS owner_name,
                   COALESCE(u.email, a.email) AS owner_email
            FROM bookings b
            LEFT JOIN users u ON u.id = b.owner_id AND b.owner_kind = 'faculty'
            LEFT JOIN admins a ON a.id = b.owner_id AND b.owner_kind = 'admin'
            ORDER BY b.booking_date DESC, b.time_slot ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    /// Bookings of one classroom on one date
    pub async fn list_for_classroom_date(&self, classroom_id: Uuid, date: NaiveDate) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE classroom_id = $1 AND booking_date = $2
            ORDER BY time_slot
            "#,
        )
        .bind(classroom_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(bookings)
    }

    /// Delete a booking
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking with id {} not found", id)));
        }
        Ok(())
    }

    /// Count bookings
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
