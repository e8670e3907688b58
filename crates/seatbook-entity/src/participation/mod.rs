//! Participation domain entity.

pub mod model;

pub use model::{Participation, ParticipationKey};
