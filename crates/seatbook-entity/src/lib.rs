//! # seatbook-entity
//!
//! Domain entity models for webinar seat booking. Every struct in this
//! crate is a plain value that derives `Debug`, `Clone`, `Serialize` and
//! `Deserialize`.

pub mod notification;
pub mod participation;
pub mod user;
pub mod webinar;

pub use notification::OrganizerNotice;
pub use participation::{Participation, ParticipationKey};
pub use user::User;
pub use webinar::Webinar;
