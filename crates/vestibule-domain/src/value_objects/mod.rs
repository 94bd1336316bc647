//! Domain Value Objects
//!
//! Immutable values defined entirely by their contents.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`SessionClaims`] | Payload carried inside a session token |
//! | [`SignedToken`] | Compact, signed session token |
//! | [`HashedSecret`] | Self-describing password hash |
//! | [`SigningSecret`] | Process-wide HMAC key material |

/// Session token payload
pub mod claims;
/// Redacting wrappers for secret material
pub mod secret;
/// Signed session token
pub mod token;

pub use claims::SessionClaims;
pub use secret::{HashedSecret, SigningSecret};
pub use token::SignedToken;
