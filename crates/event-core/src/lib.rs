//! # event-core
//!
//! Domain layer containing the event aggregate, value objects, and repository ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Event, EventProps, EventUpdate, User};
pub use error::DomainError;
pub use traits::{EventRepository, RepoResult, UserRepository};
pub use value_objects::{generate_id, AttendeeLimit};
