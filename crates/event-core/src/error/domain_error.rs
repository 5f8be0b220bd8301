//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Event {0} is required")]
    MissingField(&'static str),

    #[error("Event limit cannot be negative: {0}")]
    NegativeLimit(i64),

    #[error("Invalid event date: {0}")]
    InvalidDate(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Attendee cannot be empty")]
    EmptyAttendee,

    #[error("Event attendee limit reached ({limit})")]
    AttendeeLimitReached { limit: u32 },

    #[error("Organizer cannot be an attendee")]
    OrganizerCannotAttend,

    #[error("Attendee already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Attendee not subscribed to the event: {0}")]
    NotRegistered(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("User {user_id} is not the organizer of event {event_id}")]
    NotEventOrganizer { event_id: String, user_id: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("User lookup unavailable: {0}")]
    LookupUnavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::UserNotFound(_) => "UNKNOWN_USER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::NegativeLimit(_) => "NEGATIVE_LIMIT",
            Self::InvalidDate(_) => "INVALID_DATE",

            // Business Rules
            Self::EmptyAttendee => "EMPTY_ATTENDEE",
            Self::AttendeeLimitReached { .. } => "ATTENDEE_LIMIT_REACHED",
            Self::OrganizerCannotAttend => "ORGANIZER_CANNOT_ATTEND",
            Self::AlreadyRegistered(_) => "ALREADY_REGISTERED",
            Self::NotRegistered(_) => "NOT_REGISTERED",

            // Authorization
            Self::NotEventOrganizer { .. } => "NOT_EVENT_ORGANIZER",

            // Infrastructure
            Self::PersistenceError(_) => "PERSISTENCE_ERROR",
            Self::LookupUnavailable(_) => "LOOKUP_UNAVAILABLE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_) | Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::NegativeLimit(_)
                | Self::InvalidDate(_)
        )
    }

    /// Check if this is a business rule violation on the attendee list
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::EmptyAttendee
                | Self::AttendeeLimitReached { .. }
                | Self::OrganizerCannotAttend
                | Self::AlreadyRegistered(_)
                | Self::NotRegistered(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotEventOrganizer { .. })
    }

    /// Check if this came from a port (storage or user lookup)
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::PersistenceError(_) | Self::LookupUnavailable(_))
    }
}
