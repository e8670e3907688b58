//! Seatbook server: webinar seat booking
//!
//! Wires the stores, the notification sender and the booking service
//! together, seeds webinars from configuration and replays the configured
//! booking requests concurrently.

use std::sync::Arc;

use futures::future::join_all;
use tracing_subscriber::{EnvFilter, fmt};

use seatbook_core::config::AppConfig;
use seatbook_core::error::AppError;
use seatbook_entity::user::User;
use seatbook_entity::webinar::Webinar;
use seatbook_service::{BookSeatRequest, SeatBookingService};
use seatbook_store::{InMemoryParticipationStore, InMemoryWebinarStore, NotificationSenderDispatch};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SEATBOOK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting seatbook v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Seed webinars ────────────────────────────────────
    let webinars = InMemoryWebinarStore::new();
    for seed in &config.webinars {
        webinars.create(Webinar {
            id: seed.id,
            organizer_id: seed.organizer_id,
            title: seed.title.clone(),
            start_date: seed.start_date,
            end_date: seed.end_date,
            seats: seed.seats,
        })?;
    }
    tracing::info!("Seeded {} webinar(s)", webinars.len());

    // ── Step 2: Wire the booking service ─────────────────────────
    let participations = InMemoryParticipationStore::new();
    let notifier = NotificationSenderDispatch::new(&config.notification);
    tracing::info!(
        "Notification sender: {}",
        config.notification.sender
    );

    let service = SeatBookingService::new(
        Arc::new(webinars),
        Arc::new(participations),
        Arc::new(notifier),
        config.booking.clone(),
    );

    // ── Step 3: Replay configured bookings concurrently ──────────
    let attempts = config.bookings.iter().map(|seed| {
        let service = service.clone();
        let request = BookSeatRequest::new(
            seed.webinar_id,
            User::new(seed.user_id, seed.email.clone(), String::new()),
        );
        async move { (request.user.email.clone(), service.book(request).await) }
    });

    for (email, outcome) in join_all(attempts).await {
        match outcome {
            Ok(confirmation) => tracing::info!(
                email = %email,
                webinar_id = %confirmation.participation.webinar_id,
                notified = confirmation.notified,
                "Booking confirmed"
            ),
            Err(e) => tracing::warn!(
                email = %email,
                kind = %e.kind,
                "Booking refused: {}",
                e.message
            ),
        }
    }

    // ── Step 4: Report occupancy ─────────────────────────────────
    for seed in &config.webinars {
        let availability = service.availability(seed.id).await?;
        tracing::info!(
            webinar_id = %availability.webinar_id,
            seats = availability.seats,
            taken = availability.taken,
            remaining = availability.remaining,
            "Occupancy"
        );
    }

    Ok(())
}
