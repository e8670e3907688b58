//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};

use seatbook_core::config::BookingConfig;
use seatbook_core::types::id::{UserId, WebinarId};
use seatbook_entity::user::User;
use seatbook_entity::webinar::Webinar;
use seatbook_service::SeatBookingService;
use seatbook_store::{InMemoryMailer, InMemoryParticipationStore, InMemoryWebinarStore};

/// Booking service wired to in-memory collaborators that stay inspectable.
pub struct TestApp {
    /// Service under test.
    pub service: SeatBookingService,
    /// Webinar store shared with the service.
    pub webinars: InMemoryWebinarStore,
    /// Participation store shared with the service.
    pub participations: InMemoryParticipationStore,
    /// Mailer shared with the service.
    pub mailer: InMemoryMailer,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let webinars = InMemoryWebinarStore::new();
        let participations = InMemoryParticipationStore::new();
        let mailer = InMemoryMailer::new();

        let service = SeatBookingService::new(
            Arc::new(webinars.clone()),
            Arc::new(participations.clone()),
            Arc::new(mailer.clone()),
            BookingConfig::default(),
        );

        Self {
            service,
            webinars,
            participations,
            mailer,
        }
    }

    /// Store a webinar titled "Test Webinar" with the given capacity.
    pub fn create_webinar(&self, seats: u32) -> Webinar {
        let start = Utc::now() + Duration::days(1);
        let webinar = Webinar {
            id: WebinarId::new(),
            organizer_id: UserId::new(),
            title: "Test Webinar".to_string(),
            start_date: start,
            end_date: start + Duration::hours(1),
            seats,
        };
        self.webinars
            .create(webinar.clone())
            .expect("Failed to create webinar");
        webinar
    }
}

/// A fresh user with the given email.
pub fn user(email: &str) -> User {
    User::new(UserId::new(), email, "password")
}
