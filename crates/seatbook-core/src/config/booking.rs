//! Booking workflow and organizer notification configuration.

use serde::{Deserialize, Serialize};

/// Seat booking workflow configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Total validate-and-commit attempts per booking when the store reports
    /// a persistence conflict. `2` means one retry.
    #[serde(default = "default_max_commit_attempts")]
    pub max_commit_attempts: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_commit_attempts: default_max_commit_attempts(),
        }
    }
}

/// Which notification sender delivers organizer notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SenderKind {
    /// Emit notices as structured log events.
    #[default]
    Tracing,
    /// Keep notices in memory.
    Memory,
}

impl std::fmt::Display for SenderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SenderKind::Tracing => write!(f, "tracing"),
            SenderKind::Memory => write!(f, "memory"),
        }
    }
}

/// Organizer notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NotificationConfig {
    /// Sender implementation.
    #[serde(default)]
    pub sender: SenderKind,
}

fn default_max_commit_attempts() -> u32 {
    2
}
