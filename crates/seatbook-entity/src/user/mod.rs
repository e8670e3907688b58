//! User value consumed by the booking workflow.

pub mod model;

pub use model::User;
