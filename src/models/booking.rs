//! Booking model, bookable time slots and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::user::{AccountKind, Role};
use crate::error::{AppError, AppResult};

/// Bookable periods of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::Nine,
        TimeSlot::Ten,
        TimeSlot::Eleven,
        TimeSlot::Twelve,
        TimeSlot::Thirteen,
        TimeSlot::Fourteen,
        TimeSlot::Fifteen,
        TimeSlot::Sixteen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Nine => "09:00-10:00",
            TimeSlot::Ten => "10:00-11:00",
            TimeSlot::Eleven => "11:00-12:00",
            TimeSlot::Twelve => "12:00-13:00",
            TimeSlot::Thirteen => "13:00-14:00",
            TimeSlot::Fourteen => "14:00-15:00",
            TimeSlot::Fifteen => "15:00-16:00",
            TimeSlot::Sixteen => "16:00-17:00",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == wanted)
            .ok_or_else(|| format!("Invalid time slot: {}", s))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.as_str().to_string()
    }
}

// SQLx conversion for TimeSlot (stored as TEXT)
impl sqlx::Type<Postgres> for TimeSlot {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for TimeSlot {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for TimeSlot {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    /// Faculty user or admin that created the booking
    pub owner_id: Uuid,
    /// Table the owner lives in
    pub owner_kind: AccountKind,
    /// Classroom id (not enforced as a foreign key)
    pub classroom_id: Uuid,
    /// Classroom label at booking time
    pub classroom_label: String,
    pub smartboard_number: Option<String>,
    pub booking_date: NaiveDate,
    #[schema(value_type = String, example = "10:00-11:00")]
    pub time_slot: TimeSlot,
    pub faculty_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Owners may delete their own bookings, admins any booking
    pub fn can_be_deleted_by(&self, requester_id: Uuid, requester_role: Role) -> bool {
        requester_role == Role::Admin || self.owner_id == requester_id
    }
}

/// Booking joined with its owner, for admin listings
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookingWithOwner {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub booking: Booking,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

/// Create booking request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub classroom_id: Uuid,
    /// Calendar date (YYYY-MM-DD)
    #[validate(custom(function = "validate_booking_date"))]
    pub date: String,
    /// One of the bookable slots, e.g. "10:00-11:00"
    #[serde(alias = "time")]
    #[validate(custom(function = "validate_time_slot"))]
    pub time_slot: String,
    pub smartboard_number: Option<String>,
    /// Defaults to the caller's name
    pub faculty_name: Option<String>,
}

/// Validated booking ready to be inserted
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub owner_id: Uuid,
    pub owner_kind: AccountKind,
    pub classroom_id: Uuid,
    pub classroom_label: String,
    pub smartboard_number: Option<String>,
    pub booking_date: NaiveDate,
    pub time_slot: TimeSlot,
    pub faculty_name: Option<String>,
}

/// Availability query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    pub classroom_id: Uuid,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
}

/// State of one slot for a classroom and date
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SlotAvailability {
    #[schema(value_type = String, example = "10:00-11:00")]
    pub time_slot: TimeSlot,
    pub booked: bool,
    pub booking_id: Option<Uuid>,
}

/// Build the availability grid from the bookings of one classroom and date
pub fn slot_grid(bookings: &[Booking]) -> Vec<SlotAvailability> {
    TimeSlot::ALL
        .into_iter()
        .map(|slot| {
            let taken = bookings.iter().find(|b| b.time_slot == slot);
            SlotAvailability {
                time_slot: slot,
                booked: taken.is_some(),
                booking_id: taken.map(|b| b.id),
            }
        })
        .collect()
}

/// Parse a YYYY-MM-DD calendar date
pub fn parse_booking_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date '{}' (use YYYY-MM-DD)", value)))
}

/// Parse one of the bookable time slots
pub fn parse_time_slot(value: &str) -> AppResult<TimeSlot> {
    value.parse().map_err(|_| {
        let allowed: Vec<&str> = TimeSlot::ALL.iter().map(|s| s.as_str()).collect();
        AppError::Validation(format!(
            "Invalid time slot '{}' (allowed: {})",
            value,
            allowed.join(", ")
        ))
    })
}

fn field_error(code: &'static str, error: AppError) -> ValidationError {
    let message = match error {
        AppError::Validation(message) => message,
        other => other.to_string(),
    };
    ValidationError::new(code).with_message(message.into())
}

fn validate_booking_date(value: &str) -> Result<(), ValidationError> {
    parse_booking_date(value).map(|_| ()).map_err(|e| field_error("date", e))
}

fn validate_time_slot(value: &str) -> Result<(), ValidationError> {
    parse_time_slot(value).map(|_| ()).map_err(|e| field_error("time_slot", e))
}
