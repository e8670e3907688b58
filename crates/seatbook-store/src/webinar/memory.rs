//! In-memory webinar store backed by a `DashMap`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::info;

use seatbook_core::error::AppError;
use seatbook_core::result::AppResult;
use seatbook_core::types::id::WebinarId;
use seatbook_entity::webinar::Webinar;

use super::store::WebinarStore;

/// In-memory webinar store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWebinarStore {
    webinars: Arc<DashMap<WebinarId, Webinar>>,
}

impl InMemoryWebinarStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new webinar.
    ///
    /// The webinar must pass [`Webinar::validate`] and its id must be unused.
    pub fn create(&self, webinar: Webinar) -> AppResult<()> {
        webinar.validate()?;

        match self.webinars.entry(webinar.id) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Webinar {} already exists",
                webinar.id
            ))),
            Entry::Vacant(slot) => {
                info!(
                    webinar_id = %webinar.id,
                    seats = webinar.seats,
                    title = %webinar.title,
                    "Webinar created"
                );
                slot.insert(webinar);
                Ok(())
            }
        }
    }

    /// Number of stored webinars.
    pub fn len(&self) -> usize {
        self.webinars.len()
    }

    /// Whether the store holds no webinar.
    pub fn is_empty(&self) -> bool {
        self.webinars.is_empty()
    }
}

#[async_trait]
impl WebinarStore for InMemoryWebinarStore {
    async fn find_by_id(&self, id: &WebinarId) -> AppResult<Option<Webinar>> {
        Ok(self.webinars.get(id).map(|w| w.value().clone()))
    }
}
