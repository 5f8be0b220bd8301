//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use event_core::DomainError;

/// Date format accepted from clients (`2026-05-01T18:30`), interpreted as UTC
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse an event date in [`EVENT_DATE_FORMAT`] or RFC 3339
pub fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, EVENT_DATE_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidDate(raw.to_string()))
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Event location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Event date is required"))]
    pub date: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Event category is required"))]
    pub category: String,

    /// Maximum attendees, 0 for unlimited
    #[serde(default)]
    #[validate(range(min = 0, message = "Event limit cannot be negative"))]
    pub limit: i64,
}

/// Update event request
///
/// Replaces every editable field; the event keeps its ID, organizer,
/// creation time and attendees.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, message = "Event name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Event location is required"))]
    pub location: String,

    #[validate(length(min = 1, message = "Event date is required"))]
    pub date: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "Event category is required"))]
    pub category: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Event limit cannot be negative"))]
    pub limit: i64,
}
