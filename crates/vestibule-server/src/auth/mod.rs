//! Request authentication
//!
//! The [`Authenticated`] guard is the only way handlers obtain the caller's
//! identity.

pub mod gate;

pub use gate::{Authenticated, GateRejection};
