//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use event_core::entities::{Event, User};

use super::responses::{AttendeeListResponse, EventDetailResponse, EventResponse};
use crate::services::EnrichedAttendee;

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().to_string(),
            name: event.name().to_string(),
            location: event.location().to_string(),
            date: event.date(),
            description: event.description().map(str::to_string),
            organizer_id: event.organizer_id().to_string(),
            category: event.category().to_string(),
            limit: event.limit().get(),
            attendees_count: event.attendee_count(),
            created_at: event.created_at(),
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

impl EventDetailResponse {
    /// Details without attendee identities
    pub fn summary(event: &Event) -> Self {
        Self {
            event: EventResponse::from(event),
            attendees: None,
        }
    }

    /// Details with the enriched attendee roster attached
    pub fn with_attendees(event: &Event, attendees: Vec<EnrichedAttendee>) -> Self {
        Self {
            event: EventResponse::from(event),
            attendees: Some(attendees),
        }
    }
}

impl From<&Event> for AttendeeListResponse {
    fn from(event: &Event) -> Self {
        Self {
            event_id: event.id().to_string(),
            attendees: event.attendees().to_vec(),
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<User> for EnrichedAttendee {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
