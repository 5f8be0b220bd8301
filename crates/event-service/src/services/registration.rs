//! Registration service
//!
//! Registers users to events and cancels their subscriptions. The event
//! aggregate decides whether a change is allowed; this service loads it,
//! applies the change and saves it back.

use event_core::DomainError;
use tracing::{info, instrument};

use crate::dto::AttendeeListResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    /// Create a new RegistrationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a user to an event
    #[instrument(skip(self))]
    pub async fn register(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> ServiceResult<AttendeeListResponse> {
        let mut event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        event.add_attendee(&user.id)?;
        self.ctx.event_repo().save(&event).await?;

        info!(
            event_id = %event_id,
            user_id = %user_id,
            attendees = event.attendee_count(),
            "User registered to event"
        );

        Ok(AttendeeListResponse::from(&event))
    }

    /// Cancel a user's registration
    #[instrument(skip(self))]
    pub async fn cancel(&self, user_id: &str, event_id: &str) -> ServiceResult<AttendeeListResponse> {
        let mut event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        event.cancel_subscription(&user.id)?;
        self.ctx.event_repo().save(&event).await?;

        info!(event_id = %event_id, user_id = %user_id, "Registration cancelled");

        Ok(AttendeeListResponse::from(&event))
    }
}
