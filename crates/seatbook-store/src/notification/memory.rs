//! Sender that keeps every notice in memory.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use seatbook_core::error::AppError;
use seatbook_core::result::AppResult;
use seatbook_entity::notification::OrganizerNotice;

use super::sender::NotificationSender;

/// Records sent notices. Clones share the same outbox.
///
/// Can be switched into a failing mode where every send is rejected
/// and nothing is recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMailer {
    /// Notices accepted so far, in send order.
    outbox: Arc<Mutex<Vec<OrganizerNotice>>>,
    /// When set, sends fail.
    failing: Arc<AtomicBool>,
}

impl InMemoryMailer {
    /// Creates an empty mailer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent sends fail (`true`) or succeed (`false`).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the notices sent so far.
    pub async fn sent(&self) -> Vec<OrganizerNotice> {
        self.outbox.lock().await.clone()
    }
}

#[async_trait]
impl NotificationSender for InMemoryMailer {
    async fn send(&self, notice: &OrganizerNotice) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::notification_failure(format!(
                "Mailbox for organizer {} is unavailable",
                notice.to
            )));
        }

        let mut outbox = self.outbox.lock().await;
        outbox.push(notice.clone());
        debug!(to = %notice.to, queued = outbox.len(), "Notice recorded");
        Ok(())
    }
}
