//! # Domain Layer
//!
//! Core types for the Vestibule credential and session subsystem.
//!
//! Nothing in this crate performs I/O. Persistence, hashing, and signing are
//! described as port traits in [`ports`] and implemented by the
//! infrastructure crate.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | The persisted [`Identity`](entities::Identity) record |
//! | [`value_objects`] | Session claims, signed tokens, hashed and signing secrets |
//! | [`ports`] | Credential store, password hashing, token and clock contracts |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Protocol constants (bearer prefix, pinned algorithm) |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::Identity;
pub use error::{Error, Result, TokenError};
pub use value_objects::{HashedSecret, SessionClaims, SignedToken, SigningSecret};
