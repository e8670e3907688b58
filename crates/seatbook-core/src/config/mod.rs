//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod booking;
pub mod fixtures;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::booking::{BookingConfig, NotificationConfig, SenderKind};
pub use self::fixtures::{BookingSeed, WebinarSeed};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Booking workflow settings.
    #[serde(default)]
    pub booking: BookingConfig,
    /// Organizer notification settings.
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Webinars seeded into the in-memory store.
    #[serde(default)]
    pub webinars: Vec<WebinarSeed>,
    /// Booking requests replayed after seeding.
    #[serde(default)]
    pub bookings: Vec<BookingSeed>,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `SEATBOOK__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SEATBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Reject settings the booking workflow cannot run with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.booking.max_commit_attempts == 0 {
            return Err(AppError::configuration(
                "booking.max_commit_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}
