//! Session claims
//!
//! The payload carried by a session token. All four fields are required on
//! decode; a token missing any of them is malformed.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Identity;

/// Session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the identity's public uuid
    pub sub: Uuid,
    /// Username at issue time
    pub username: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expires at, unix seconds
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for `identity`, issued at `issued_at` and valid for `ttl`
    pub fn for_identity(identity: &Identity, issued_at: DateTime<Utc>, ttl: TimeDelta) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: identity.uuid,
            username: identity.username.clone(),
            iat,
            exp: iat.saturating_add(ttl.num_seconds()),
        }
    }

    /// Issue instant
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Expiry instant
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// True once `now` is strictly past the expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at()
    }

    /// True while `now` is before the issue instant
    pub fn is_premature_at(&self, now: DateTime<Utc>) -> bool {
        now < self.issued_at()
    }
}
