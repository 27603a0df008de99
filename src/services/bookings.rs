//! Booking allocation service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{
            parse_booking_date, parse_time_slot, slot_grid, AvailabilityQuery, Booking, BookingWithOwner,
            CreateBooking, NewBooking, SlotAvailability,
        },
        user::UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Book a classroom slot for the caller.
    ///
    /// Input is validated before touching the database. The slot itself is
    /// claimed by a conditional insert, so a taken slot yields `Conflict`
    /// regardless of how many requests race for it.
    pub async fn create(&self, claims: &UserClaims, data: CreateBooking) -> AppResult<Booking> {
        let booking_date = parse_booking_date(&data.date)?;
        let time_slot = parse_time_slot(&data.time_slot)?;

        let classroom = self.repository.classrooms.get_by_id(data.classroom_id).await?;

        let smartboard_number = match data.smartboard_number.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(number) => {
                if classroom.smartboard(number).is_none() {
                    return Err(AppError::Validation(format!(
                        "Smartboard {} does not exist in classroom {}",
                        number, classroom.label
                    )));
                }
                Some(number.to_string())
            }
        };

        let faculty_name = data
            .faculty_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| claims.name.clone());

        let new_booking = NewBooking {
            owner_id: claims.sub,
            owner_kind: claims.account,
            classroom_id: classroom.id,
            classroom_label: classroom.label.clone(),
            smartboard_number,
            booking_date,
            time_slot,
            faculty_name: Some(faculty_name),
        };

        match self.repository.bookings.try_insert(&new_booking).await? {
            Some(booking) => {
                tracing::info!(
                    booking_id = %booking.id,
                    classroom = %booking.classroom_label,
                    date = %booking.booking_date,
                    slot = %booking.time_slot,
                    "Booking created"
                );
                Ok(booking)
            }
            None => {
                tracing::warn!(
                    classroom_id = %classroom.id,
                    date = %booking_date,
                    slot = %time_slot,
                    "Booking rejected: slot already taken"
                );
                Err(AppError::Conflict(format!(
                    "Classroom {} is already booked on {} for {}",
                    classroom.label, booking_date, time_slot
                )))
            }
        }
    }

    /// Delete a booking owned by the caller, or any booking for an admin
    pub async fn delete(&self, claims: &UserClaims, booking_id: Uuid) -> AppResult<()> {
        let booking = self.repository.bookings.get_by_id(booking_id).await?;

        if !booking.can_be_deleted_by(claims.sub, claims.role) {
            return Err(AppError::Authorization(
                "You can only delete your own bookings".to_string(),
            ));
        }

        self.repository.bookings.delete(booking_id).await?;
        tracing::info!(booking_id = %booking_id, deleted_by = %claims.sub, "Booking deleted");

        Ok(())
    }

    /// Bookings created by the caller
    pub async fn list_mine(&self, claims: &UserClaims) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list_by_owner(claims.sub).await
    }

    /// All bookings with their owners (admin)
    pub async fn list_all(&self) -> AppResult<Vec<BookingWithOwner>> {
        self.repository.bookings.list_all_with_owner().await
    }

    /// Slot grid of one classroom on one date
    pub async fn availability(&self, query: &AvailabilityQuery) -> AppResult<Vec<SlotAvailability>> {
        let date = parse_booking_date(&query.date)?;
        self.repository.classrooms.get_by_id(query.classroom_id).await?;
        let bookings = self
            .repository
            .bookings
            .list_for_classroom_date(query.classroom_id, date)
            .await?;
        Ok(slot_grid(&bookings))
    }
}
