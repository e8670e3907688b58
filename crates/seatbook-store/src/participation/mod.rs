//! Participation port and its in-memory adapter.

pub mod memory;
pub mod store;

pub use memory::InMemoryParticipationStore;
pub use store::ParticipationStore;
