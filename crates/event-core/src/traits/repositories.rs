//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Lookups return `Ok(None)` for a missing record. `Err` is reserved for
//! the port itself failing.

use async_trait::async_trait;

use crate::entities::{Event, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Event>>;

    /// Find event by ID, only if it belongs to the given organizer
    async fn find_by_id_and_organizer(
        &self,
        id: &str,
        organizer_id: &str,
    ) -> RepoResult<Option<Event>>;

    /// List all events
    async fn find_all(&self) -> RepoResult<Vec<Event>>;

    /// List events a user is registered to
    async fn find_by_attendee(&self, user_id: &str) -> RepoResult<Vec<Event>>;

    /// List events created by an organizer
    async fn find_by_organizer(&self, organizer_id: &str) -> RepoResult<Vec<Event>>;

    /// List events in a category
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Event>>;

    /// Substring search over name and description
    async fn find_by_term(&self, term: &str) -> RepoResult<Vec<Event>>;

    /// Insert or replace an event
    async fn save(&self, event: &Event) -> RepoResult<()>;

    /// Delete an event
    async fn delete(&self, id: &str) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

/// User lookup port
///
/// Called once per attendee when an organizer's roster is enriched, possibly
/// from many tasks at once. Return `DomainError::LookupUnavailable` when the
/// backing store itself is down.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;
}
