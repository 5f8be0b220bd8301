//! Domain entities - core business objects

mod event;
mod user;

pub use event::{Event, EventProps, EventUpdate};
pub use user::User;
