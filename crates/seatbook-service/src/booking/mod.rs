//! Seat booking workflow.

pub mod lock;
pub mod request;
pub mod service;

pub use lock::WebinarLocks;
pub use request::{BookSeatRequest, BookingConfirmation, SeatAvailability};
pub use service::SeatBookingService;
