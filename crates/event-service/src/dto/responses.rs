//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::EnrichedAttendee;

// ============================================================================
// Event Responses
// ============================================================================

/// Public event summary
///
/// Attendee identities are never part of the summary, only their count.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub location: String,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub organizer_id: String,
    pub category: String,
    /// 0 means unlimited
    pub limit: u32,
    pub attendees_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Event details as returned by a single-event lookup
///
/// `attendees` is only present when the requester organizes the event.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetailResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<EnrichedAttendee>>,
}

// ============================================================================
// Registration Responses
// ============================================================================

/// Attendee IDs of an event after a registration change, in registration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendeeListResponse {
    pub event_id: String,
    pub attendees: Vec<String>,
}
