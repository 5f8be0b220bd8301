//! Entity identifiers
//!
//! Events and users are identified by opaque strings. Newly created
//! entities get a random UUID v4.

use uuid::Uuid;

/// Generate a fresh unique entity ID
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
