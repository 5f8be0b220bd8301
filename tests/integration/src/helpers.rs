//! Test helpers for integration tests
//!
//! Provides a wired-up application over the in-memory stores and an
//! instrumented user lookup port with configurable latency and failures.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use event_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use event_core::entities::User;
use event_core::traits::{RepoResult, UserRepository};
use event_core::DomainError;
use event_service::{EventService, RegistrationService, ServiceContext, ServiceContextBuilder};
use event_store::{InMemoryEventRepository, InMemoryUserRepository};
use parking_lot::Mutex;

use crate::fixtures::unique_user;

/// Configuration used by [`TestApp::start`]
pub fn test_config() -> Result<AppConfig> {
    let config = AppConfig::from_lookup(|key| match key {
        "APP_NAME" => Some("event-server-test".to_string()),
        "LOG_FORMAT" => Some("pretty".to_string()),
        "ENRICHMENT_MAX_CONCURRENT_LOOKUPS" => Some("0".to_string()),
        _ => None,
    })?;
    Ok(config)
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_test_tracing(config: &AppConfig) {
    let _ = try_init_tracing_with_config(TracingConfig::for_settings(&config.app));
}

// ============================================================================
// Instrumented lookup port
// ============================================================================

#[derive(Default)]
struct LookupScript {
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    unavailable: HashSet<String>,
    started: Vec<String>,
    completed: Vec<String>,
}

/// User lookup port that records every call
///
/// Wraps an in-memory directory. Each ID can be given its own latency, made
/// to fail, or made to report the whole port as unavailable.
pub struct InstrumentedLookup {
    directory: InMemoryUserRepository,
    script: Mutex<LookupScript>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl InstrumentedLookup {
    pub fn new() -> Self {
        Self {
            directory: InMemoryUserRepository::new(),
            script: Mutex::new(LookupScript::default()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Add a user to the backing directory
    pub fn insert(&self, user: User) {
        self.directory.insert(user);
    }

    /// Delay lookups of `id`
    pub fn delay(&self, id: &str, latency: Duration) {
        self.script.lock().delays.insert(id.to_string(), latency);
    }

    /// Make lookups of `id` fail with a per-record error
    pub fn fail(&self, id: &str) {
        self.script.lock().failing.insert(id.to_string());
    }

    /// Make lookups of `id` report the port as unavailable
    pub fn outage(&self, id: &str) {
        self.script.lock().unavailable.insert(id.to_string());
    }

    /// IDs whose lookup has started, in start order
    pub fn started(&self) -> Vec<String> {
        self.script.lock().started.clone()
    }

    /// IDs whose lookup has finished, in completion order
    pub fn completed(&self) -> Vec<String> {
        self.script.lock().completed.clone()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

impl Default for InstrumentedLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InstrumentedLookup {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let (delay, failing, unavailable) = {
            let mut script = self.script.lock();
            script.started.push(id.to_string());
            (
                script.delays.get(id).copied(),
                script.failing.contains(id),
                script.unavailable.contains(id),
            )
        };

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let result = if unavailable {
            Err(DomainError::LookupUnavailable("user directory offline".to_string()))
        } else if failing {
            Err(DomainError::PersistenceError(format!("corrupt user record {id}")))
        } else {
            self.directory.find_by_id(id).await
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.script.lock().completed.push(id.to_string());
        result
    }
}

// ============================================================================
// Test application
// ============================================================================

/// Services wired to in-memory stores
pub struct TestApp {
    pub ctx: ServiceContext,
    pub events: Arc<InMemoryEventRepository>,
    pub lookup: Arc<InstrumentedLookup>,
}

impl TestApp {
    /// Start an app with the default test configuration
    pub fn start() -> Result<Self> {
        Self::start_with_config(test_config()?)
    }

    /// Start an app with a custom configuration
    pub fn start_with_config(config: AppConfig) -> Result<Self> {
        init_test_tracing(&config);

        let events = Arc::new(InMemoryEventRepository::new());
        let lookup = Arc::new(InstrumentedLookup::new());

        let ctx = ServiceContextBuilder::new()
            .event_repo(events.clone())
            .user_repo(lookup.clone())
            .enrichment(config.enrichment)
            .build()?;

        Ok(Self {
            ctx,
            events,
            lookup,
        })
    }

    /// Register a fresh user in the directory
    pub fn add_user(&self, name: &str) -> User {
        let user = unique_user(name);
        self.lookup.insert(user.clone());
        user
    }

    pub fn event_service(&self) -> EventService<'_> {
        EventService::new(&self.ctx)
    }

    pub fn registrations(&self) -> RegistrationService<'_> {
        RegistrationService::new(&self.ctx)
    }
}
