//! Attendee enrichment tests
//!
//! Uses the instrumented lookup port to check that the organizer view waits
//! for every lookup and drops only the ones that failed.
//!
//! Run with: cargo test -p integration-tests --test attendee_enrichment

use std::time::Duration;

use event_common::{AppConfig, EnrichmentConfig};
use event_core::DomainError;
use event_service::AttendeeEnrichmentService;
use integration_tests::{create_event_request, test_config, TestApp};

#[tokio::test]
async fn test_returns_resolved_attendees_after_all_lookups() {
    let app = TestApp::start().unwrap();

    // Six attendees with staggered latencies; two of them fail
    let users: Vec<_> = (0..6).map(|i| app.add_user(&format!("Guest{i}"))).collect();
    let ids: Vec<String> = users.iter().map(|u| u.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        let latency = u64::try_from(60 - i * 10).unwrap();
        app.lookup.delay(id, Duration::from_millis(latency));
    }
    app.lookup.fail(&ids[1]);
    app.lookup.fail(&ids[4]);

    let attendees = AttendeeEnrichmentService::new(&app.ctx)
        .enrich(&ids)
        .await
        .unwrap();

    assert_eq!(attendees.len(), 4);
    assert_eq!(app.lookup.completed().len(), 6);
    assert_eq!(app.lookup.in_flight(), 0);

    let mut resolved: Vec<&str> = attendees.iter().map(|a| a.id.as_str()).collect();
    resolved.sort_unstable();
    let mut expected = vec![
        ids[0].as_str(),
        ids[2].as_str(),
        ids[3].as_str(),
        ids[5].as_str(),
    ];
    expected.sort_unstable();
    assert_eq!(resolved, expected);
}

#[tokio::test]
async fn test_lookups_run_concurrently() {
    let app = TestApp::start().unwrap();
    let ids: Vec<String> = (0..5)
        .map(|i| {
            let user = app.add_user(&format!("Guest{i}"));
            app.lookup.delay(&user.id, Duration::from_millis(50));
            user.id
        })
        .collect();

    AttendeeEnrichmentService::new(&app.ctx)
        .enrich(&ids)
        .await
        .unwrap();

    assert_eq!(app.lookup.peak_in_flight(), 5);
}

#[tokio::test]
async fn test_organizer_view_through_event_service() {
    let app = TestApp::start().unwrap();
    let organizer = app.add_user("Olga");
    let alice = app.add_user("Alice");
    let bob = app.add_user("Bob");

    let event = app
        .event_service()
        .create_event(&organizer.id, create_event_request(0))
        .await
        .unwrap();
    app.registrations().register(&alice.id, &event.id).await.unwrap();
    app.registrations().register(&bob.id, &event.id).await.unwrap();

    // Bob's record is corrupt; the roster is still served without him
    app.lookup.fail(&bob.id);

    let detail = app
        .event_service()
        .get_event(&event.id, &organizer.id)
        .await
        .unwrap();
    assert_eq!(detail.event.attendees_count, 2);

    let roster = detail.attendees.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, alice.id);
    assert_eq!(roster[0].email, alice.email);

    let scoped = app
        .event_service()
        .get_organizer_event(&event.id, &organizer.id)
        .await
        .unwrap();
    assert_eq!(scoped.attendees.unwrap().len(), 1);
}

#[tokio::test]
async fn test_outage_propagates_once_everything_finished() {
    let app = TestApp::start().unwrap();
    let ids: Vec<String> = (0..4)
        .map(|i| app.add_user(&format!("Guest{i}")).id)
        .collect();

    app.lookup.outage(&ids[0]);
    app.lookup.delay(&ids[0], Duration::from_millis(5));
    for id in &ids[1..] {
        app.lookup.delay(id, Duration::from_millis(40));
    }

    let err = AttendeeEnrichmentService::new(&app.ctx)
        .enrich(&ids)
        .await
        .unwrap_err();

    assert!(matches!(
        err.as_domain(),
        Some(DomainError::LookupUnavailable(_))
    ));
    assert_eq!(err.status_code(), 503);
    assert_eq!(app.lookup.completed().len(), 4);
    assert_eq!(app.lookup.in_flight(), 0);
}

#[tokio::test]
async fn test_configured_cap_limits_in_flight_lookups() {
    let config = AppConfig {
        enrichment: EnrichmentConfig {
            max_concurrent_lookups: 2,
        },
        ..test_config().unwrap()
    };
    let app = TestApp::start_with_config(config).unwrap();

    let ids: Vec<String> = (0..6)
        .map(|i| {
            let user = app.add_user(&format!("Guest{i}"));
            app.lookup.delay(&user.id, Duration::from_millis(15));
            user.id
        })
        .collect();

    let attendees = AttendeeEnrichmentService::new(&app.ctx)
        .enrich(&ids)
        .await
        .unwrap();

    assert_eq!(attendees.len(), 6);
    assert_eq!(app.lookup.started().len(), 6);
    assert!(app.lookup.peak_in_flight() <= 2);
}
