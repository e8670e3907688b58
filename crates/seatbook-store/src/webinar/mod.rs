//! Webinar lookup port and its in-memory adapter.

pub mod memory;
pub mod store;

pub use memory::InMemoryWebinarStore;
pub use store::WebinarStore;
