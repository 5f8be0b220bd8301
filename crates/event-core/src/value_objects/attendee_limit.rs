//! Attendee limit - the capacity of an event
//!
//! A limit of zero means the event is unbounded. Negative limits are
//! rejected when the value is built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum number of attendees an event admits (0 = unlimited)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendeeLimit(u32);

impl AttendeeLimit {
    /// Create a limit from a raw value
    #[inline]
    pub const fn new(limit: u32) -> Self {
        Self(limit)
    }

    /// Get the inner value
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether capacity is enforced at all
    #[inline]
    pub const fn is_unbounded(self) -> bool {
        self.0 == 0
    }

    /// Whether an event holding `count` attendees can take one more
    pub fn admits(self, count: usize) -> bool {
        self.is_unbounded() || count < self.0 as usize
    }

    /// Whether `count` attendees fit within the limit
    pub fn fits(self, count: usize) -> bool {
        self.is_unbounded() || count <= self.0 as usize
    }

    /// Free seats left for `count` attendees (None when unbounded)
    pub fn remaining(self, count: usize) -> Option<u32> {
        if self.is_unbounded() {
            None
        } else {
            let taken = u32::try_from(count).unwrap_or(u32::MAX);
            Some(self.0.saturating_sub(taken))
        }
    }
}

impl TryFrom<i64> for AttendeeLimit {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DomainError::NegativeLimit(value));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::ValidationError(format!("Event limit too large: {value}")))
    }
}

impl From<u32> for AttendeeLimit {
    fn from(limit: u32) -> Self {
        Self(limit)
    }
}

impl fmt::Display for AttendeeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            f.write_str("unlimited")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
