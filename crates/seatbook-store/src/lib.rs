//! # seatbook-store
//!
//! Collaborator ports used by the booking workflow, each next to its
//! in-memory adapter:
//! - [`WebinarStore`] / [`InMemoryWebinarStore`]
//! - [`ParticipationStore`] / [`InMemoryParticipationStore`]
//! - [`NotificationSender`] / [`InMemoryMailer`], [`TracingMailer`]

pub mod notification;
pub mod participation;
pub mod webinar;

pub use notification::{InMemoryMailer, NotificationSender, NotificationSenderDispatch, TracingMailer};
pub use participation::{InMemoryParticipationStore, ParticipationStore};
pub use webinar::{InMemoryWebinarStore, WebinarStore};
