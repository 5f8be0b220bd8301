//! # event-service
//!
//! Application layer containing the event use cases, attendee enrichment, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AttendeeEnrichmentService, EnrichedAttendee, EventService, RegistrationService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
