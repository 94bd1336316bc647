//! Domain Entities
//!
//! Entities carry a stable identity that outlives changes to their
//! attributes.

/// Persisted user credential record
pub mod identity;

pub use identity::Identity;
