//! User entity - the read-only view of an account this domain consumes

use chrono::{DateTime, Utc};

/// User referenced by events as organizer or attendee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the current time as creation date
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
