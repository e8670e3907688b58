//! Organizer notices.

pub mod notice;

pub use notice::OrganizerNotice;
