//! Seed data replayed by the server binary on startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{UserId, WebinarId};

/// A webinar to insert into the webinar store at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebinarSeed {
    /// Webinar identifier.
    pub id: WebinarId,
    /// Organizer receiving booking notices.
    pub organizer_id: UserId,
    /// Display title.
    pub title: String,
    /// Start of the session.
    pub start_date: DateTime<Utc>,
    /// End of the session.
    pub end_date: DateTime<Utc>,
    /// Seat capacity.
    pub seats: u32,
}

/// A booking request to run against a seeded webinar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSeed {
    /// Target webinar.
    pub webinar_id: WebinarId,
    /// Registering user.
    pub user_id: UserId,
    /// Registering user's email, quoted in the organizer notice.
    pub email: String,
}
