//! User value model.

use std::fmt;

use serde::{Deserialize, Serialize};

use seatbook_core::types::id::UserId;

/// A registered user as handed to the booking workflow.
///
/// Account storage and authentication live elsewhere; booking only reads
/// `id` and `email`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Contact address quoted in organizer notices.
    pub email: String,
    /// Opaque credential. Never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl User {
    /// Creates a user value.
    pub fn new(id: UserId, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
