//! Service context - dependency container for services
//!
//! Holds the repository ports and enrichment settings every service needs.
//! Dependencies are passed in explicitly; nothing is reached through globals.

use std::sync::Arc;

use event_common::EnrichmentConfig;
use event_core::traits::{EventRepository, UserRepository};
use tokio::sync::Semaphore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    event_repo: Arc<dyn EventRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Enrichment
    enrichment: EnrichmentConfig,
    lookup_limiter: Option<Arc<Semaphore>>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        event_repo: Arc<dyn EventRepository>,
        user_repo: Arc<dyn UserRepository>,
        enrichment: EnrichmentConfig,
    ) -> Self {
        // One limiter per context so the cap holds across concurrent requests
        let lookup_limiter = match enrichment.max_concurrent_lookups {
            0 => None,
            permits => Some(Arc::new(Semaphore::new(permits))),
        };

        Self {
            event_repo,
            user_repo,
            enrichment,
            lookup_limiter,
        }
    }

    // === Repositories ===

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get an owned handle to the user repository for spawned lookups
    pub fn user_lookup(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.user_repo)
    }

    // === Enrichment ===

    /// Get the shared limiter for in-flight user lookups, if capped
    pub fn lookup_limiter(&self) -> Option<Arc<Semaphore>> {
        self.lookup_limiter.clone()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("enrichment", &self.enrichment)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    event_repo: Option<Arc<dyn EventRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    enrichment: EnrichmentConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn enrichment(mut self, config: EnrichmentConfig) -> Self {
        self.enrichment = config;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.enrichment,
        ))
    }
}
