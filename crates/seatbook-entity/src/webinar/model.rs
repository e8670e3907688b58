//! Webinar entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seatbook_core::error::AppError;
use seatbook_core::types::id::{UserId, WebinarId};

/// A scheduled session with a fixed seat capacity.
///
/// Read-only from the booking workflow's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webinar {
    /// Unique webinar identifier.
    pub id: WebinarId,
    /// The organizing user, recipient of booking notices.
    pub organizer_id: UserId,
    /// Display title.
    pub title: String,
    /// When the session starts.
    pub start_date: DateTime<Utc>,
    /// When the session ends.
    pub end_date: DateTime<Utc>,
    /// Seat capacity.
    pub seats: u32,
}

impl Webinar {
    /// Check the creation-time invariants.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.start_date >= self.end_date {
            return Err(AppError::validation(format!(
                "Webinar {} must start before it ends",
                self.id
            )));
        }
        Ok(())
    }

    /// Whether `taken` participations already fill every seat.
    pub fn is_full(&self, taken: usize) -> bool {
        taken >= self.seats as usize
    }

    /// Seats left once `taken` participations are counted.
    pub fn seats_remaining(&self, taken: usize) -> u32 {
        let taken = u32::try_from(taken).unwrap_or(u32::MAX);
        self.seats.saturating_sub(taken)
    }
}
