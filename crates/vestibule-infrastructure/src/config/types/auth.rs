//! Authentication configuration types

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use vestibule_domain::constants::DEFAULT_SESSION_TTL_SECS;
use vestibule_domain::error::{Error, Result};

use crate::constants::BCRYPT_DEFAULT_COST;

/// Password hashing algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    /// bcrypt with a configurable cost
    #[default]
    Bcrypt,
    /// Argon2id with library defaults
    Argon2,
}

/// JWT configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// HMAC signing secret
    ///
    /// **REQUIRED.** Configure via `VESTIBULE__AUTH__JWT__SECRET`, the bare
    /// `JWT_SECRET` variable, or `auth.jwt.secret` in the config file.
    /// Must be at least 32 characters.
    pub secret: String,

    /// Session lifetime in seconds
    pub expiration_secs: u64,
}

impl JwtConfig {
    /// Session lifetime as a signed duration
    pub fn session_ttl(&self) -> Result<TimeDelta> {
        i64::try_from(self.expiration_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .filter(|ttl| *ttl > TimeDelta::zero())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "JWT expiration must be a positive number of seconds, got {}",
                    self.expiration_secs
                ))
            })
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            // Empty by default; validation in loader.rs rejects it
            secret: String::new(),
            expiration_secs: DEFAULT_SESSION_TTL_SECS.unsigned_abs(),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_secs", &self.expiration_secs)
            .finish()
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    /// Algorithm for new hashes; verification auto-detects
    pub algorithm: PasswordAlgorithm,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Bcrypt,
            bcrypt_cost: BCRYPT_DEFAULT_COST,
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Session token settings
    pub jwt: JwtConfig,
    /// Password hashing settings
    pub password: PasswordConfig,
}
