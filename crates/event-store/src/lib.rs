//! # event-store
//!
//! In-memory implementations of the repository ports defined in `event-core`.
//!
//! Each adapter keeps its records in a `DashMap`, so it can be shared across
//! tasks behind an `Arc`. `save` replaces the stored record wholesale
//! (last write wins); callers that need stronger guarantees for concurrent
//! registrations on one event must bring their own storage.

mod event;
mod user;

pub use event::InMemoryEventRepository;
pub use user::InMemoryUserRepository;
