//! Registration flow tests
//!
//! Drives the registration and cancellation use cases end to end over the
//! in-memory stores.
//!
//! Run with: cargo test -p integration-tests --test registration_flow

use event_core::DomainError;
use integration_tests::{create_event_request, TestApp};

#[tokio::test]
async fn test_capacity_and_cancellation_scenario() {
    let app = TestApp::start().unwrap();
    let organizer = app.add_user("Olga");
    let a = app.add_user("Alice");
    let b = app.add_user("Bob");
    let c = app.add_user("Carol");

    let event = app
        .event_service()
        .create_event(&organizer.id, create_event_request(2))
        .await
        .unwrap();
    let registrations = app.registrations();

    let list = registrations.register(&a.id, &event.id).await.unwrap();
    assert_eq!(list.attendees, [a.id.clone()]);

    let err = registrations.register(&a.id, &event.id).await.unwrap_err();
    assert_eq!(err.as_domain(), Some(&DomainError::AlreadyRegistered(a.id.clone())));

    let list = registrations.register(&b.id, &event.id).await.unwrap();
    assert_eq!(list.attendees, [a.id.clone(), b.id.clone()]);

    let err = registrations.register(&c.id, &event.id).await.unwrap_err();
    assert_eq!(err.as_domain(), Some(&DomainError::AttendeeLimitReached { limit: 2 }));

    let list = registrations.cancel(&a.id, &event.id).await.unwrap();
    assert_eq!(list.attendees, [b.id.clone()]);

    let list = registrations.register(&c.id, &event.id).await.unwrap();
    assert_eq!(list.attendees, [b.id.clone(), c.id.clone()]);

    let stored = app.event_service().get_event(&event.id, &a.id).await.unwrap();
    assert_eq!(stored.event.attendees_count, 2);
}

#[tokio::test]
async fn test_unlimited_event_never_fills() {
    let app = TestApp::start().unwrap();
    let organizer = app.add_user("Olga");
    let event = app
        .event_service()
        .create_event(&organizer.id, create_event_request(0))
        .await
        .unwrap();

    for i in 0..50 {
        let user = app.add_user(&format!("Guest{i}"));
        app.registrations().register(&user.id, &event.id).await.unwrap();
    }

    let detail = app.event_service().get_event(&event.id, "someone").await.unwrap();
    assert_eq!(detail.event.attendees_count, 50);
    assert_eq!(detail.event.limit, 0);
}

#[tokio::test]
async fn test_organizer_cannot_register() {
    let app = TestApp::start().unwrap();
    let organizer = app.add_user("Olga");
    let event = app
        .event_service()
        .create_event(&organizer.id, create_event_request(5))
        .await
        .unwrap();

    let err = app
        .registrations()
        .register(&organizer.id, &event.id)
        .await
        .unwrap_err();
    assert_eq!(err.as_domain(), Some(&DomainError::OrganizerCannotAttend));
    assert_eq!(err.status_code(), 422);
}

#[tokio::test]
async fn test_unknown_event_or_user() {
    let app = TestApp::start().unwrap();
    let organizer = app.add_user("Olga");
    let alice = app.add_user("Alice");
    let event = app
        .event_service()
        .create_event(&organizer.id, create_event_request(5))
        .await
        .unwrap();

    let err = app.registrations().register(&alice.id, "no-such-event").await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.error_code(), "UNKNOWN_EVENT");

    let err = app.registrations().cancel("no-such-user", &event.id).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_USER");
}

#[tokio::test]
async fn test_list_by_user_follows_registrations() {
    let app = TestApp::start().unwrap();
    let organizer = app.add_user("Olga");
    let alice = app.add_user("Alice");
    let service = app.event_service();

    let first = service
        .create_event(&organizer.id, create_event_request(0))
        .await
        .unwrap();
    let second = service
        .create_event(&organizer.id, create_event_request(0))
        .await
        .unwrap();

    app.registrations().register(&alice.id, &first.id).await.unwrap();
    app.registrations().register(&alice.id, &second.id).await.unwrap();
    app.registrations().cancel(&alice.id, &first.id).await.unwrap();

    let attending = service.list_by_user(&alice.id).await.unwrap();
    assert_eq!(attending.len(), 1);
    assert_eq!(attending[0].id, second.id);
}
