//! Per-webinar mutual exclusion for the check-and-commit section.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use seatbook_core::types::id::WebinarId;

/// Registry of async mutexes keyed by webinar.
///
/// Bookings for the same webinar queue on one mutex; different webinars
/// never share one. Clones share the registry.
#[derive(Debug, Clone, Default)]
pub struct WebinarLocks {
    locks: Arc<DashMap<WebinarId, Arc<Mutex<()>>>>,
}

impl WebinarLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `webinar_id`.
    ///
    /// The guard is owned so it can be held across awaits; the section ends
    /// when it is dropped.
    pub async fn acquire(&self, webinar_id: WebinarId) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the map shard is released before waiting.
        let lock = self
            .locks
            .entry(webinar_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}
