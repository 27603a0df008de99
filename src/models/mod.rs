//! Data models for the booking server

pub mod admin;
pub mod booking;
pub mod classroom;
pub mod user;

// Re-export commonly used types
pub use admin::Admin;
pub use booking::{Booking, BookingWithOwner, TimeSlot};
pub use classroom::{Classroom, Department, Smartboard, SmartboardStatus};
pub use user::{AccountKind, Role, User, UserClaims};
