//! Value objects - immutable types that represent domain concepts

mod attendee_limit;
mod id;

pub use attendee_limit::AttendeeLimit;
pub use id::generate_id;
