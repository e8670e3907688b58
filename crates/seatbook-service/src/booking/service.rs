//! Seat booking service: validates a registration and commits it under a
//! per-webinar lock.

use std::sync::Arc;

use tracing::{debug, info, warn};

use seatbook_core::config::BookingConfig;
use seatbook_core::error::AppError;
use seatbook_core::result::AppResult;
use seatbook_core::types::id::WebinarId;
use seatbook_entity::notification::OrganizerNotice;
use seatbook_entity::participation::Participation;
use seatbook_entity::user::User;
use seatbook_entity::webinar::Webinar;
use seatbook_store::notification::NotificationSender;
use seatbook_store::participation::ParticipationStore;
use seatbook_store::webinar::WebinarStore;

use super::lock::WebinarLocks;
use super::request::{BookSeatRequest, BookingConfirmation, SeatAvailability};

/// Books webinar seats without overselling or double registration.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. the webinar exists (`NotFound`)
/// 2. a seat is free (`CapacityExceeded`)
/// 3. the user holds no seat yet (`DuplicateRegistration`)
///
/// Reading the current participations, validating, and saving happen under
/// the webinar's lock. The organizer is notified after the lock is released.
#[derive(Debug, Clone)]
pub struct SeatBookingService {
    /// Webinar lookup.
    webinars: Arc<dyn WebinarStore>,
    /// Confirmed seats.
    participations: Arc<dyn ParticipationStore>,
    /// Organizer notices.
    notifier: Arc<dyn NotificationSender>,
    /// One mutex per webinar.
    locks: WebinarLocks,
    /// Retry settings.
    config: BookingConfig,
}

impl SeatBookingService {
    /// Creates a new booking service.
    pub fn new(
        webinars: Arc<dyn WebinarStore>,
        participations: Arc<dyn ParticipationStore>,
        notifier: Arc<dyn NotificationSender>,
        config: BookingConfig,
    ) -> Self {
        Self {
            webinars,
            participations,
            notifier,
            locks: WebinarLocks::new(),
            config,
        }
    }

    /// Reserves one seat for `request.user`.
    ///
    /// The booking runs on its own task. Dropping the returned future does
    /// not abort a booking that has started, so a committed seat is final.
    pub async fn book(&self, request: BookSeatRequest) -> AppResult<BookingConfirmation> {
        let service = self.clone();
        tokio::spawn(async move { service.execute(request).await })
            .await
            .map_err(|e| AppError::internal(format!("Booking task failed: {e}")))?
    }

    /// Reports seats taken and remaining, consistent with in-flight bookings.
    pub async fn availability(&self, webinar_id: WebinarId) -> AppResult<SeatAvailability> {
        let webinar = self.load_webinar(&webinar_id).await?;

        let taken = {
            let _guard = self.locks.acquire(webinar_id).await;
            self.participations
                .find_by_webinar_id(&webinar_id)
                .await?
                .len()
        };

        Ok(SeatAvailability {
            webinar_id,
            seats: webinar.seats,
            taken: u32::try_from(taken).unwrap_or(u32::MAX),
            remaining: webinar.seats_remaining(taken),
        })
    }

    async fn execute(&self, request: BookSeatRequest) -> AppResult<BookingConfirmation> {
        let BookSeatRequest { webinar_id, user } = request;

        let webinar = self.load_webinar(&webinar_id).await?;
        let participation = self.reserve(&webinar, &user).await?;

        info!(
            webinar_id = %webinar.id,
            user_id = %user.id,
            "Seat booked"
        );

        let notified = self.notify_organizer(&webinar, &user).await;

        Ok(BookingConfirmation {
            participation,
            notified,
        })
    }

    async fn load_webinar(&self, webinar_id: &WebinarId) -> AppResult<Webinar> {
        self.webinars
            .find_by_id(webinar_id)
            .await?
            .ok_or_else(|| AppError::not_found("Webinar not found"))
    }

    /// Runs validate-and-commit under the webinar lock, re-validating when
    /// the store reports a conflicting write.
    ///
    /// Once the attempts are used up, the current state is checked one last
    /// time without saving so a seat lost to a rival surfaces as
    /// `CapacityExceeded` or `DuplicateRegistration`.
    async fn reserve(&self, webinar: &Webinar, user: &User) -> AppResult<Participation> {
        let _guard = self.locks.acquire(webinar.id).await;

        let mut attempt = 1;
        loop {
            match self.try_commit(webinar, user).await {
                Err(err) if err.kind.is_retryable() => {
                    debug!(
                        webinar_id = %webinar.id,
                        user_id = %user.id,
                        attempt,
                        error = %err,
                        "Commit conflict, re-validating"
                    );
                    if attempt >= self.config.max_commit_attempts {
                        self.validate(webinar, user).await?;
                        return Err(err);
                    }
                    attempt += 1;
                }
                outcome => return outcome,
            }
        }
    }

    async fn try_commit(&self, webinar: &Webinar, user: &User) -> AppResult<Participation> {
        self.validate(webinar, user).await?;

        let participation = Participation::new(webinar.id, user.id);
        self.participations.save(&participation).await?;
        Ok(participation)
    }

    /// Checks capacity, then duplicates, against the stored participations.
    async fn validate(&self, webinar: &Webinar, user: &User) -> AppResult<()> {
        let participations = self
            .participations
            .find_by_webinar_id(&webinar.id)
            .await?;

        if webinar.is_full(participations.len()) {
            return Err(AppError::capacity_exceeded(
                "No seats available for this webinar",
            ));
        }

        if participations.iter().any(|p| p.is_held_by(&user.id)) {
            return Err(AppError::duplicate_registration(
                "User is already registered for this webinar",
            ));
        }

        Ok(())
    }

    async fn notify_organizer(&self, webinar: &Webinar, user: &User) -> bool {
        let notice = OrganizerNotice::new_participant(webinar, user);

        match self.notifier.send(&notice).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    webinar_id = %webinar.id,
                    organizer_id = %webinar.organizer_id,
                    error = %e,
                    "Failed to notify organizer; booking kept"
                );
                false
            }
        }
    }
}
