//! Data transfer objects for use case inputs and outputs
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{parse_event_date, CreateEventRequest, UpdateEventRequest, EVENT_DATE_FORMAT};
pub use responses::{AttendeeListResponse, EventDetailResponse, EventResponse};
