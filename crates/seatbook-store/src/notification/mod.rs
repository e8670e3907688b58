//! Organizer notification port and its adapters.
//!
//! Two senders are provided:
//! - [`TracingMailer`] writes notices to the log
//! - [`InMemoryMailer`] records notices for inspection

pub mod logging;
pub mod memory;
pub mod sender;

pub use logging::TracingMailer;
pub use memory::InMemoryMailer;
pub use sender::{NotificationSender, NotificationSenderDispatch};
