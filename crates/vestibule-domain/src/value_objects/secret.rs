//! Secret material wrappers
//!
//! Both types redact themselves in `Debug` so they cannot leak through
//! logging or error formatting.

use std::fmt;

use crate::constants::MIN_SIGNING_SECRET_LENGTH;
use crate::error::{Error, Result};

/// A password hash in self-describing form (`$2b$...` or `$argon2id$...`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedSecret(String);

impl HashedSecret {
    /// Wrap an encoded hash
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash, for verification and persistence only
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedSecret(***)")
    }
}

/// HMAC key used to sign and verify session tokens
#[derive(Clone)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Wrap a configured secret
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` when the secret is shorter than
    /// [`MIN_SIGNING_SECRET_LENGTH`] bytes.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.len() < MIN_SIGNING_SECRET_LENGTH {
            return Err(Error::configuration(format!(
                "JWT secret must be at least {MIN_SIGNING_SECRET_LENGTH} characters"
            )));
        }
        Ok(Self(secret.into_bytes()))
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(***)")
    }
}
