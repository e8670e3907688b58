//! # seatbook-service
//!
//! Business logic for booking webinar seats. [`SeatBookingService`]
//! orchestrates the webinar store, the participation store and the
//! notification sender.
//!
//! Services follow constructor injection: all collaborators are provided
//! at construction time via `Arc` references.

pub mod booking;

pub use booking::{
    BookSeatRequest, BookingConfirmation, SeatAvailability, SeatBookingService, WebinarLocks,
};
