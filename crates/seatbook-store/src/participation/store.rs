//! Participation store trait.

use async_trait::async_trait;

use seatbook_core::result::AppResult;
use seatbook_core::types::id::WebinarId;
use seatbook_entity::participation::Participation;

/// Storage for confirmed seats.
///
/// Implementations must be thread-safe and handle concurrent access.
#[async_trait]
pub trait ParticipationStore: Send + Sync + std::fmt::Debug {
    /// Returns every participation of a webinar, oldest first.
    ///
    /// Must reflect all saves that completed before the call.
    async fn find_by_webinar_id(&self, webinar_id: &WebinarId) -> AppResult<Vec<Participation>>;

    /// Persists a new participation.
    ///
    /// Fails with `ErrorKind::PersistenceConflict` when a participation with
    /// the same `(webinar_id, user_id)` key already exists. Never overwrites.
    async fn save(&self, participation: &Participation) -> AppResult<()>;
}
