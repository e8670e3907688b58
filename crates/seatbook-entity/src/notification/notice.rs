//! Organizer notice sent after a successful booking.

use serde::{Deserialize, Serialize};

use seatbook_core::types::id::UserId;

use crate::user::User;
use crate::webinar::Webinar;

/// Subject line of every new-participant notice.
pub const NEW_PARTICIPANT_SUBJECT: &str = "New participant registered";

/// A message addressed to a webinar organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizerNotice {
    /// Recipient organizer.
    pub to: UserId,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

impl OrganizerNotice {
    /// Builds the notice announcing that `user` took a seat in `webinar`.
    pub fn new_participant(webinar: &Webinar, user: &User) -> Self {
        Self {
            to: webinar.organizer_id,
            subject: NEW_PARTICIPANT_SUBJECT.to_string(),
            body: format!(
                "{} has registered for your webinar \"{}\".",
                user.email, webinar.title
            ),
        }
    }
}
