//! Event aggregate - an organized event and the attendees it admits
//!
//! The aggregate is the single authority over its attendee list. Every path
//! that touches the list goes through [`Event::add_attendee`] or
//! [`Event::cancel_subscription`], so the following always hold:
//!
//! 1. the organizer is never an attendee
//! 2. no attendee appears twice
//! 3. with a non-zero limit, the attendee count never exceeds it
//! 4. `id`, `organizer_id` and `created_at` never change once built

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{generate_id, AttendeeLimit};

/// Constructor input for [`Event`]
///
/// Every field is optional so the same type serves both fresh creation and
/// reconstruction from storage. `id`, `created_at` and `attendees` are only
/// supplied on the reconstruction path.
#[derive(Debug, Clone, Default)]
pub struct EventProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub organizer_id: Option<String>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub attendees: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Organizer-editable fields of an event
#[derive(Debug, Clone)]
pub struct EventUpdate {
    pub name: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub category: String,
    pub limit: i64,
}

/// Event aggregate root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: String,
    name: String,
    location: String,
    date: DateTime<Utc>,
    description: Option<String>,
    organizer_id: String,
    category: String,
    limit: AttendeeLimit,
    attendees: Vec<String>,
    created_at: DateTime<Utc>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::MissingField(field)),
    }
}

impl Event {
    /// Build an event, validating every required field
    ///
    /// A fresh ID and `created_at = now` are assigned unless supplied.
    pub fn new(props: EventProps) -> Result<Self, DomainError> {
        let name = required(props.name, "name")?;
        let location = required(props.location, "location")?;
        let date = props.date.ok_or(DomainError::MissingField("date"))?;
        let organizer_id = required(props.organizer_id, "organizer ID")?;
        let category = required(props.category, "category")?;
        let limit = AttendeeLimit::try_from(props.limit.ok_or(DomainError::MissingField("limit"))?)?;

        let id = match props.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => generate_id(),
        };

        let event = Self {
            id,
            name,
            location,
            date,
            description: props.description.filter(|d| !d.is_empty()),
            organizer_id,
            category,
            limit,
            attendees: Vec::with_capacity(props.attendees.len()),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };

        event.with_roster(props.attendees)
    }

    /// Rebuild an event from stored state
    pub fn load(props: EventProps) -> Result<Self, DomainError> {
        Self::new(props)
    }

    /// Check a supplied roster against the invariants before adopting it
    fn with_roster(mut self, attendees: Vec<String>) -> Result<Self, DomainError> {
        if !self.limit.fits(attendees.len()) {
            return Err(DomainError::AttendeeLimitReached {
                limit: self.limit.get(),
            });
        }

        for attendee in attendees {
            if attendee.is_empty() {
                return Err(DomainError::ValidationError(
                    "Attendee list contains an empty ID".to_string(),
                ));
            }
            if attendee == self.organizer_id {
                return Err(DomainError::ValidationError(
                    "Attendee list contains the organizer".to_string(),
                ));
            }
            if self.attendees.contains(&attendee) {
                return Err(DomainError::ValidationError(format!(
                    "Attendee list contains {attendee} twice"
                )));
            }
            self.attendees.push(attendee);
        }

        Ok(self)
    }

    /// Produce the updated version of this event
    ///
    /// The identity, organizer, creation time and roster are carried forward;
    /// everything else comes from `update` and is validated again.
    pub fn apply_update(&self, update: EventUpdate) -> Result<Self, DomainError> {
        Self::new(EventProps {
            id: Some(self.id.clone()),
            name: Some(update.name),
            location: Some(update.location),
            date: Some(update.date),
            description: update.description,
            organizer_id: Some(self.organizer_id.clone()),
            category: Some(update.category),
            limit: Some(update.limit),
            attendees: self.attendees.clone(),
            created_at: Some(self.created_at),
        })
    }

    /// Register a user as attendee
    ///
    /// Only mutates the in-memory aggregate; the caller persists it.
    pub fn add_attendee(&mut self, user_id: &str) -> Result<(), DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::EmptyAttendee);
        }

        if !self.limit.admits(self.attendees.len()) {
            return Err(DomainError::AttendeeLimitReached {
                limit: self.limit.get(),
            });
        }

        if self.is_organizer(user_id) {
            return Err(DomainError::OrganizerCannotAttend);
        }

        if self.is_attending(user_id) {
            return Err(DomainError::AlreadyRegistered(user_id.to_string()));
        }

        self.attendees.push(user_id.to_string());
        Ok(())
    }

    /// Remove a user from the attendee list, keeping the order of the rest
    pub fn cancel_subscription(&mut self, user_id: &str) -> Result<(), DomainError> {
        if user_id.is_empty() {
            return Err(DomainError::EmptyAttendee);
        }

        let position = self
            .attendees
            .iter()
            .position(|a| a == user_id)
            .ok_or_else(|| DomainError::NotRegistered(user_id.to_string()))?;

        self.attendees.remove(position);
        Ok(())
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[inline]
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn organizer_id(&self) -> &str {
        &self.organizer_id
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn limit(&self) -> AttendeeLimit {
        self.limit
    }

    /// Attendee IDs in registration order
    #[inline]
    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of registered attendees
    #[inline]
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    /// Check if a user organizes this event
    #[inline]
    pub fn is_organizer(&self, user_id: &str) -> bool {
        self.organizer_id == user_id
    }

    /// Check if a user is registered
    pub fn is_attending(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|a| a == user_id)
    }

    /// Seats left (None if unbounded)
    pub fn remaining_capacity(&self) -> Option<u32> {
        self.limit.remaining(self.attendees.len())
    }

    /// Case-insensitive substring match over name and description
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}
