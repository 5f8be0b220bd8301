//! Attendee enrichment service
//!
//! Resolves an event's attendee IDs into user profiles for the organizer view.
//! Every ID gets its own task; the call returns once all of them have
//! finished. Lookups that fail for a single ID are dropped from the result.
//! Only an outage of the lookup port itself fails the call.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use event_core::entities::User;
use event_core::traits::{RepoResult, UserRepository};
use event_core::DomainError;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn, Instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// One resolved attendee of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedAttendee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Attendee enrichment service
pub struct AttendeeEnrichmentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendeeEnrichmentService<'a> {
    /// Create a new AttendeeEnrichmentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve attendee IDs into profiles
    ///
    /// The result is in completion order and holds at most one entry per
    /// input ID. IDs that are unknown or whose lookup failed are left out.
    ///
    /// # Errors
    /// Returns `DomainError::LookupUnavailable` if any lookup reported the
    /// port as unavailable. This is only decided after every task finished.
    #[instrument(skip(self, attendee_ids), fields(requested = attendee_ids.len()))]
    pub async fn enrich(&self, attendee_ids: &[String]) -> ServiceResult<Vec<EnrichedAttendee>> {
        if attendee_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut lookups = JoinSet::new();
        for id in attendee_ids {
            lookups.spawn(
                lookup_one(self.ctx.user_lookup(), self.ctx.lookup_limiter(), id.clone())
                    .in_current_span(),
            );
        }

        let mut attendees = Vec::with_capacity(attendee_ids.len());
        let mut outage: Option<DomainError> = None;

        while let Some(joined) = lookups.join_next().await {
            match joined {
                Ok((_, Ok(Some(user)))) => attendees.push(EnrichedAttendee::from(user)),
                Ok((id, Ok(None))) => {
                    debug!(user_id = %id, "Attendee has no user record, skipped");
                }
                Ok((id, Err(err @ DomainError::LookupUnavailable(_)))) => {
                    warn!(user_id = %id, error = %err, "User lookup unavailable");
                    outage.get_or_insert(err);
                }
                Ok((id, Err(err))) => {
                    debug!(user_id = %id, error = %err, "Attendee lookup failed, skipped");
                }
                Err(err) => {
                    warn!(error = %err, "Attendee lookup task did not complete");
                }
            }
        }

        if let Some(err) = outage {
            return Err(err.into());
        }

        debug!(resolved = attendees.len(), "Attendees enriched");
        Ok(attendees)
    }
}

/// Look up a single attendee, waiting for a limiter permit first if capped
async fn lookup_one(
    lookup: Arc<dyn UserRepository>,
    limiter: Option<Arc<Semaphore>>,
    id: String,
) -> (String, RepoResult<Option<User>>) {
    // Held until the lookup returns
    let _permit = match limiter {
        Some(limiter) => match limiter.acquire_owned().await {
            Ok(permit) => Some(permit),
            Err(_) => {
                let err = DomainError::LookupUnavailable("lookup limiter closed".to_string());
                return (id, Err(err));
            }
        },
        None => None,
    };

    let result = lookup.find_by_id(&id).await;
    (id, result)
}
