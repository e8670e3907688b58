//! Integration tests for concurrent bookings.

mod helpers;

use std::collections::HashSet;

use futures::future::join_all;

use seatbook_core::error::ErrorKind;
use seatbook_service::BookSeatRequest;
use seatbook_store::ParticipationStore;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_last_seat_goes_to_exactly_one_user() {
    let app = helpers::TestApp::new();
    let webinar = app.create_webinar(1);

    let first = app.service.clone();
    let second = app.service.clone();
    let (a, b) = tokio::join!(
        first.book(BookSeatRequest::new(webinar.id, helpers::user("a@test.com"))),
        second.book(BookSeatRequest::new(webinar.id, helpers::user("b@test.com"))),
    );

    let outcomes = [a, b];
    let successes = outcomes.iter().filter(|o| o.is_ok()).count();
    assert_eq!(successes, 1);

    let failure = outcomes
        .iter()
        .find_map(|o| o.as_ref().err())
        .expect("one booking should fail");
    assert_eq!(failure.kind, ErrorKind::CapacityExceeded);

    assert_eq!(app.participations.count(&webinar.id), 1);
    assert_eq!(app.mailer.sent().await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_capacity_never_exceeded_under_load() {
    let app = helpers::TestApp::new();
    let seats = 5;
    let webinar = app.create_webinar(seats);
    let webinar_id = webinar.id;

    let attempts = (0..50).map(|i| {
        let service = app.service.clone();
        let user = helpers::user(&format!("user{i}@test.com"));
        tokio::spawn(async move { service.book(BookSeatRequest::new(webinar_id, user)).await })
    });
    let outcomes: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    let successes = outcomes.iter().filter(|o| o.is_ok()).count();
    assert_eq!(successes, seats as usize);
    assert!(
        outcomes
            .iter()
            .filter_map(|o| o.as_ref().err())
            .all(|e| e.kind == ErrorKind::CapacityExceeded)
    );

    let participations = app
        .participations
        .find_by_webinar_id(&webinar.id)
        .await
        .unwrap();
    assert_eq!(participations.len(), seats as usize);
    let distinct: HashSet<_> = participations.iter().map(|p| p.user_id).collect();
    assert_eq!(distinct.len(), seats as usize);
    assert_eq!(app.mailer.sent().await.len(), seats as usize);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_same_user_books_once_under_load() {
    let app = helpers::TestApp::new();
    let webinar = app.create_webinar(10);
    let webinar_id = webinar.id;
    let user = helpers::user("eager@test.com");

    let attempts = (0..20).map(|_| {
        let service = app.service.clone();
        let user = user.clone();
        tokio::spawn(async move { service.book(BookSeatRequest::new(webinar_id, user)).await })
    });
    let outcomes: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked"))
        .collect();

    assert_eq!(outcomes.iter().filter(|o| o.is_ok()).count(), 1);
    assert!(
        outcomes
            .iter()
            .filter_map(|o| o.as_ref().err())
            .all(|e| e.kind == ErrorKind::DuplicateRegistration)
    );
    assert_eq!(app.participations.count(&webinar.id), 1);
    assert_eq!(app.mailer.sent().await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_webinars_fill_independently() {
    let app = helpers::TestApp::new();
    let small = app.create_webinar(1);
    let large = app.create_webinar(3);

    let attempts = (0..6).flat_map(|i| {
        [small.id, large.id].into_iter().map(move |webinar_id| (i, webinar_id))
    });
    let tasks = attempts.map(|(i, webinar_id)| {
        let service = app.service.clone();
        let user = helpers::user(&format!("user{i}@test.com"));
        tokio::spawn(async move { service.book(BookSeatRequest::new(webinar_id, user)).await })
    });
    join_all(tasks).await;

    assert_eq!(app.participations.count(&small.id), 1);
    assert_eq!(app.participations.count(&large.id), 3);
}
