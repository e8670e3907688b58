//! Input and output values of the booking workflow.

use serde::{Deserialize, Serialize};

use seatbook_core::types::id::WebinarId;
use seatbook_entity::participation::Participation;
use seatbook_entity::user::User;

/// A request to reserve one seat.
#[derive(Debug, Clone)]
pub struct BookSeatRequest {
    /// Target webinar.
    pub webinar_id: WebinarId,
    /// Registering user.
    pub user: User,
}

impl BookSeatRequest {
    /// Creates a booking request.
    pub fn new(webinar_id: WebinarId, user: User) -> Self {
        Self { webinar_id, user }
    }
}

/// Outcome of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// The committed seat.
    pub participation: Participation,
    /// Whether the organizer notice was delivered. A failed delivery does
    /// not undo the seat.
    pub notified: bool,
}

/// Seat occupancy of one webinar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAvailability {
    /// The webinar.
    pub webinar_id: WebinarId,
    /// Seat capacity.
    pub seats: u32,
    /// Seats held by participants.
    pub taken: u32,
    /// Seats still open.
    pub remaining: u32,
}
