//! Ports the domain depends on

mod repositories;

pub use repositories::{EventRepository, RepoResult, UserRepository};
