//! Unified error types for seat booking.
//!
//! Every crate in the workspace reports failures as [`AppError`]. Callers
//! branch on [`AppError::kind`] rather than on message text.

use std::fmt;
use thiserror::Error;

/// Error kind categorization used across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The referenced webinar does not exist.
    NotFound,
    /// The webinar has no seats left.
    CapacityExceeded,
    /// The user already holds a seat in the webinar.
    DuplicateRegistration,
    /// A store detected a concurrent write on the same participation key.
    PersistenceConflict,
    /// Organizer notification could not be delivered.
    NotificationFailure,
    /// Input validation failed.
    Validation,
    /// A record with the same identity already exists.
    Conflict,
    /// A configuration error occurred.
    Configuration,
    /// An internal error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether the booking workflow may re-run validation after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PersistenceConflict)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::CapacityExceeded => write!(f, "CAPACITY_EXCEEDED"),
            Self::DuplicateRegistration => write!(f, "DUPLICATE_REGISTRATION"),
            Self::PersistenceConflict => write!(f, "PERSISTENCE_CONFLICT"),
            Self::NotificationFailure => write!(f, "NOTIFICATION_FAILURE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a capacity-exceeded error.
    pub fn capacity_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CapacityExceeded, message)
    }

    /// Create a duplicate-registration error.
    pub fn duplicate_registration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateRegistration, message)
    }

    /// Create a persistence-conflict error.
    pub fn persistence_conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PersistenceConflict, message)
    }

    /// Create a notification-failure error.
    pub fn notification_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotificationFailure, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
