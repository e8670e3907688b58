//! Participation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seatbook_core::types::id::{UserId, WebinarId};

/// Natural key of a participation. Unique across all participations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipationKey {
    /// The webinar holding the seat.
    pub webinar_id: WebinarId,
    /// The user occupying the seat.
    pub user_id: UserId,
}

/// A confirmed seat: one user registered for one webinar.
///
/// Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    /// The webinar holding the seat.
    pub webinar_id: WebinarId,
    /// The user occupying the seat.
    pub user_id: UserId,
    /// When the seat was reserved.
    pub registered_at: DateTime<Utc>,
}

impl Participation {
    /// Creates a participation registered now.
    pub fn new(webinar_id: WebinarId, user_id: UserId) -> Self {
        Self {
            webinar_id,
            user_id,
            registered_at: Utc::now(),
        }
    }

    /// Returns the composite key.
    pub fn key(&self) -> ParticipationKey {
        ParticipationKey {
            webinar_id: self.webinar_id,
            user_id: self.user_id,
        }
    }

    /// Whether this seat belongs to `user_id`.
    pub fn is_held_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }
}
