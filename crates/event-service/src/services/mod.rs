//! Business logic services
//!
//! Each service borrows a [`ServiceContext`] and orchestrates the event
//! aggregate, its repository, and the user lookup port.

pub mod context;
pub mod enrichment;
pub mod error;
pub mod event;
pub mod registration;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use enrichment::{AttendeeEnrichmentService, EnrichedAttendee};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use registration::RegistrationService;
