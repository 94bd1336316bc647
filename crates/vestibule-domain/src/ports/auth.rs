//! Authentication ports
//!
//! Contracts for password hashing and session tokens.

use chrono::TimeDelta;

use crate::entities::Identity;
use crate::error::{Result, TokenError};
use crate::value_objects::{HashedSecret, SessionClaims, SignedToken};

/// Salted, deliberately slow password hashing
pub trait PasswordHashing: Send + Sync {
    /// Hash `password` with a fresh random salt
    ///
    /// Two calls with the same input produce different outputs.
    fn hash(&self, password: &str) -> Result<HashedSecret>;

    /// Check `password` against a stored hash
    ///
    /// A mismatch is `Ok(false)`. A hash in an unrecognized format is
    /// `Err(Error::MalformedHash)`.
    fn verify(&self, password: &str, hashed: &HashedSecret) -> Result<bool>;
}

/// Issues signed session tokens
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `identity` valid for `ttl` from now
    ///
    /// `ttl` must be positive.
    fn issue(&self, identity: &Identity, ttl: TimeDelta) -> Result<SignedToken>;
}

/// Verifies presented session tokens
pub trait TokenVerifier: Send + Sync {
    /// Check structure, algorithm, signature and time window in that order
    fn verify(&self, token: &str) -> std::result::Result<SessionClaims, TokenError>;
}
