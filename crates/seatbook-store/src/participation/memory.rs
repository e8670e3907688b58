//! In-memory participation store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, warn};

use seatbook_core::error::AppError;
use seatbook_core::result::AppResult;
use seatbook_core::types::id::WebinarId;
use seatbook_entity::participation::Participation;

use super::store::ParticipationStore;

/// In-memory participation store, one list per webinar.
///
/// The shard lock taken by [`DashMap::entry`] makes the duplicate check and
/// the insert one step, so two saves for the same key never both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParticipationStore {
    participations: Arc<DashMap<WebinarId, Vec<Participation>>>,
}

impl InMemoryParticipationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of participations recorded for a webinar.
    pub fn count(&self, webinar_id: &WebinarId) -> usize {
        self.participations
            .get(webinar_id)
            .map(|list| list.len())
            .unwrap_or(0)
    }
}

#[async_trait]
impl ParticipationStore for InMemoryParticipationStore {
    async fn find_by_webinar_id(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>> {
        let mut list = self
            .participations
            .get(webinar_id)
            .map(|list| list.value().clone())
            .unwrap_or_default();
        list.sort_by_key(|p| p.registered_at);
        Ok(list)
    }

    async fn save(&self, participation: &Participation) -> AppResult<()> {
        let key = participation.key();
        let mut list = self
            .participations
            .entry(key.webinar_id)
            .or_default();

        if list.iter().any(|p| p.key() == key) {
            warn!(
                webinar_id = %participation.webinar_id,
                user_id = %participation.user_id,
                "Rejected participation with an existing key"
            );
            return Err(AppError::persistence_conflict(format!(
                "Participation for user {} in webinar {} already exists",
                participation.user_id, participation.webinar_id
            )));
        }

        list.push(participation.clone());
        debug!(
            webinar_id = %participation.webinar_id,
            user_id = %participation.user_id,
            count = list.len(),
            "Participation saved"
        );
        Ok(())
    }
}
