//! Integration tests for the seat booking workflow.

mod helpers;

use seatbook_core::error::ErrorKind;
use seatbook_core::types::id::WebinarId;
use seatbook_entity::participation::Participation;
use seatbook_service::BookSeatRequest;
use seatbook_store::ParticipationStore;

#[tokio::test]
async fn test_book_seat_successfully() {
    let app = helpers::TestApp::new();
    let webinar = app.create_webinar(10);
    let user = helpers::user("user@test.com");

    let confirmation = app
        .service
        .book(BookSeatRequest::new(webinar.id, user.clone()))
        .await
        .expect("booking should succeed");

    assert_eq!(confirmation.participation.webinar_id, webinar.id);
    assert_eq!(confirmation.participation.user_id, user.id);
    assert!(confirmation.notified);

    let participations = app
        .participations
        .find_by_webinar_id(&webinar.id)
        .await
        .unwrap();
    assert_eq!(participations.len(), 1);

    let sent = app.mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, webinar.organizer_id);
    assert_eq!(sent[0].subject, "New participant registered");
    assert_eq!(
        sent[0].body,
        "user@test.com has registered for your webinar \"Test Webinar\"."
    );
}

#[tokio::test]
async fn test_no_seats_available() {
    let app = helpers::TestApp::new();
    let webinar = app.create_webinar(0);

    let err = app
        .service
        .book(BookSeatRequest::new(webinar.id, helpers::user("user@test.com")))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::CapacityExceeded);
    assert_eq!(err.message, "No seats available for this webinar");
    assert_eq!(app.participations.count(&webinar.id), 0);
    assert!(app.mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_user_already_registered() {
    let app = helpers::TestApp::new();
    let webinar = app.create_webinar(10);
    let user = helpers::user("user@test.com");
    app.participations
        .save(&Participation::new(webinar.id, user.id))
        .await
        .unwrap();

    let err = app
        .service
        .book(BookSeatRequest::new(webinar.id, user))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::DuplicateRegistration);
    assert_eq!(err.message, "User is already registered for this webinar");
    assert_eq!(app.participations.count(&webinar.id), 1);
    assert!(app.mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_webinar_not_found() {
    let app = helpers::TestApp::new();
    let webinar_id = WebinarId::new();

    let err = app
        .service
        .book(BookSeatRequest::new(webinar_id, helpers::user("user@test.com")))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Webinar not found");
    assert_eq!(app.participations.count(&webinar_id), 0);
    assert!(app.mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_notification_failure_keeps_booking() {
    let app = helpers::TestApp::new();
    let webinar = app.create_webinar(10);
    app.mailer.set_failing(true);

    let confirmation = app
        .service
        .book(BookSeatRequest::new(webinar.id, helpers::user("user@test.com")))
        .await
        .expect("booking should succeed without the notice");

    assert!(!confirmation.notified);
    assert_eq!(app.participations.count(&webinar.id), 1);
    assert!(app.mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_fills_up_then_refuses() {
    let app = helpers::TestApp::new();
    let webinar = app.create_webinar(2);

    for email in ["a@test.com", "b@test.com"] {
        app.service
            .book(BookSeatRequest::new(webinar.id, helpers::user(email)))
            .await
            .expect("seat available");
    }

    let err = app
        .service
        .book(BookSeatRequest::new(webinar.id, helpers::user("c@test.com")))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::CapacityExceeded);

    let availability = app.service.availability(webinar.id).await.unwrap();
    assert_eq!(availability.taken, 2);
    assert_eq!(availability.remaining, 0);
    assert_eq!(app.mailer.sent().await.len(), 2);
}
