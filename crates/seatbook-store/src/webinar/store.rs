//! Webinar lookup trait.

use async_trait::async_trait;

use seatbook_core::result::AppResult;
use seatbook_core::types::id::WebinarId;
use seatbook_entity::webinar::Webinar;

/// Read access to scheduled webinars.
///
/// Population is the concern of whoever manages webinars; booking only reads.
#[async_trait]
pub trait WebinarStore: Send + Sync + std::fmt::Debug {
    /// Finds a webinar by id. `Ok(None)` when it does not exist.
    async fn find_by_id(&self, id: &WebinarId) -> AppResult<Option<Webinar>>;
}
