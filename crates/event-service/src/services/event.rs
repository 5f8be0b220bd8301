//! Event service
//!
//! Handles event creation, organizer-only edits, and the read views.

use event_core::entities::{Event, EventProps, EventUpdate};
use event_core::DomainError;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    parse_event_date, CreateEventRequest, EventDetailResponse, EventResponse, UpdateEventRequest,
};

use super::context::ServiceContext;
use super::enrichment::AttendeeEnrichmentService;
use super::error::ServiceResult;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event owned by `organizer_id`
    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        organizer_id: &str,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        request.validate()?;
        let date = parse_event_date(&request.date)?;

        let event = Event::new(EventProps {
            name: Some(request.name),
            location: Some(request.location),
            date: Some(date),
            description: request.description,
            organizer_id: Some(organizer_id.to_string()),
            category: Some(request.category),
            limit: Some(request.limit),
            ..EventProps::default()
        })?;

        self.ctx.event_repo().save(&event).await?;

        info!(event_id = %event.id(), organizer_id = %organizer_id, "Event created");

        Ok(EventResponse::from(&event))
    }

    /// Replace the editable fields of an event (organizer only)
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: &str,
        organizer_id: &str,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let existing = self.load(event_id).await?;
        ensure_organizer(&existing, organizer_id)?;

        request.validate()?;
        let date = parse_event_date(&request.date)?;

        let updated = existing.apply_update(EventUpdate {
            name: request.name,
            location: request.location,
            date,
            description: request.description,
            category: request.category,
            limit: request.limit,
        })?;

        self.ctx.event_repo().save(&updated).await?;

        info!(event_id = %event_id, "Event updated");

        Ok(EventResponse::from(&updated))
    }

    /// Delete an event (organizer only)
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: &str, organizer_id: &str) -> ServiceResult<()> {
        let event = self.load(event_id).await?;
        ensure_organizer(&event, organizer_id)?;

        self.ctx.event_repo().delete(event_id).await?;

        info!(event_id = %event_id, "Event deleted");

        Ok(())
    }

    /// Get event details as seen by `requester_id`
    ///
    /// Everyone sees the attendee count. Only the organizer gets the
    /// resolved attendee roster.
    #[instrument(skip(self))]
    pub async fn get_event(
        &self,
        event_id: &str,
        requester_id: &str,
    ) -> ServiceResult<EventDetailResponse> {
        let event = self.load(event_id).await?;

        if !event.is_organizer(requester_id) {
            return Ok(EventDetailResponse::summary(&event));
        }

        self.with_roster(&event).await
    }

    /// Get one of the organizer's own events with its resolved roster
    #[instrument(skip(self))]
    pub async fn get_organizer_event(
        &self,
        event_id: &str,
        organizer_id: &str,
    ) -> ServiceResult<EventDetailResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id_and_organizer(event_id, organizer_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id.to_string()))?;

        self.with_roster(&event).await
    }

    /// List every event
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find_all().await?;
        Ok(to_responses(&events))
    }

    /// List events created by an organizer
    #[instrument(skip(self))]
    pub async fn list_by_organizer(&self, organizer_id: &str) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find_by_organizer(organizer_id).await?;
        Ok(to_responses(&events))
    }

    /// List events in a category
    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: &str) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find_by_category(category).await?;
        Ok(to_responses(&events))
    }

    /// Search events whose name or description contains `term`
    #[instrument(skip(self))]
    pub async fn search_events(&self, term: &str) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find_by_term(term).await?;
        Ok(to_responses(&events))
    }

    /// List events a user is registered to
    #[instrument(skip(self))]
    pub async fn list_by_user(&self, user_id: &str) -> ServiceResult<Vec<EventResponse>> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))?;

        let events = self.ctx.event_repo().find_by_attendee(user_id).await?;
        Ok(to_responses(&events))
    }

    // === Helpers ===

    async fn load(&self, event_id: &str) -> ServiceResult<Event> {
        Ok(self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id.to_string()))?)
    }

    async fn with_roster(&self, event: &Event) -> ServiceResult<EventDetailResponse> {
        let attendees = AttendeeEnrichmentService::new(self.ctx)
            .enrich(event.attendees())
            .await?;
        Ok(EventDetailResponse::with_attendees(event, attendees))
    }
}

fn ensure_organizer(event: &Event, user_id: &str) -> Result<(), DomainError> {
    if event.is_organizer(user_id) {
        Ok(())
    } else {
        Err(DomainError::NotEventOrganizer {
            event_id: event.id().to_string(),
            user_id: user_id.to_string(),
        })
    }
}

fn to_responses(events: &[Event]) -> Vec<EventResponse> {
    events.iter().map(EventResponse::from).collect()
}
