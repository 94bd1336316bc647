//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the infrastructure layer. All ports
//! are synchronous and `Send + Sync`; async callers move blocking work onto
//! a worker thread.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`CredentialStore`] | Durable identity persistence |
//! | [`PasswordHashing`] | Salted, slow password hashing |
//! | [`TokenIssuer`] / [`TokenVerifier`] | Session token signing and checking |
//! | [`Clock`] | Source of the current instant |

/// Password hashing and session token ports
pub mod auth;
/// Time source port
pub mod clock;
/// Identity persistence port
pub mod credential_store;

pub use auth::{PasswordHashing, TokenIssuer, TokenVerifier};
pub use clock::Clock;
pub use credential_store::CredentialStore;
