//! Notification sender trait and config-driven dispatch.

use async_trait::async_trait;

use seatbook_core::config::{NotificationConfig, SenderKind};
use seatbook_core::result::AppResult;
use seatbook_entity::notification::OrganizerNotice;

use super::logging::TracingMailer;
use super::memory::InMemoryMailer;

/// Delivers notices to organizers.
///
/// Failures are reported with `ErrorKind::NotificationFailure`; the caller
/// decides whether they matter.
#[async_trait]
pub trait NotificationSender: Send + Sync + std::fmt::Debug {
    /// Sends one notice.
    async fn send(&self, notice: &OrganizerNotice) -> AppResult<()>;
}

/// Dispatcher for notification senders.
///
/// Switches between senders based on configuration.
#[derive(Debug, Clone)]
pub enum NotificationSenderDispatch {
    /// Log-only sender.
    Tracing(TracingMailer),
    /// Recording sender.
    Memory(InMemoryMailer),
}

impl NotificationSenderDispatch {
    /// Creates the sender selected by `config.sender`.
    pub fn new(config: &NotificationConfig) -> Self {
        match config.sender {
            SenderKind::Tracing => Self::Tracing(TracingMailer::new()),
            SenderKind::Memory => Self::Memory(InMemoryMailer::new()),
        }
    }

    /// Returns the recording sender, if that is the one in use.
    pub fn as_memory(&self) -> Option<&InMemoryMailer> {
        match self {
            Self::Memory(inner) => Some(inner),
            Self::Tracing(_) => None,
        }
    }
}

#[async_trait]
impl NotificationSender for NotificationSenderDispatch {
    async fn send(&self, notice: &OrganizerNotice) -> AppResult<()> {
        match self {
            Self::Tracing(inner) => inner.send(notice).await,
            Self::Memory(inner) => inner.send(notice).await,
        }
    }
}
