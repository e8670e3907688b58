//! Sender that writes organizer notices to the log.

use async_trait::async_trait;
use tracing::info;

use seatbook_core::result::AppResult;
use seatbook_entity::notification::OrganizerNotice;

use super::sender::NotificationSender;

/// Emits each notice as a structured `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMailer;

impl TracingMailer {
    /// Creates the sender.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSender for TracingMailer {
    async fn send(&self, notice: &OrganizerNotice) -> AppResult<()> {
        info!(
            to = %notice.to,
            subject = %notice.subject,
            body = %notice.body,
            "Organizer notice"
        );
        Ok(())
    }
}
