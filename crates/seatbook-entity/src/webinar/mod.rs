//! Webinar domain entity.

pub mod model;

pub use model::Webinar;
