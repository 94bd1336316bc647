//! Identity entity
//!
//! One registered principal. The store is the only component that creates
//! or mutates an identity; everything else receives read-only copies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::value_objects::HashedSecret;

/// A registered principal as persisted by the credential store
///
/// `uuid` is the public identifier and the only one ever placed in a session
/// token. The internal row id never leaves the store. The password hash is
/// skipped by serialization and redacted in `Debug` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Public identifier, assigned once at creation
    pub uuid: Uuid,
    /// Unique login name
    pub username: String,
    /// Contact email, stored as given
    pub email: String,
    /// Password hash in self-describing form
    #[serde(skip)]
    pub password_hash: HashedSecret,
    /// Creation instant
    pub created_at: DateTime<Utc>,
    /// Last modification instant
    pub updated_at: DateTime<Utc>,
    /// Whether the account may log in
    pub is_active: bool,
    /// Most recent successful login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Identity {
    /// Build a fresh, active identity with a newly generated uuid
    pub fn register(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: HashedSecret,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash,
            created_at: now,
            updated_at: now,
            is_active: true,
            last_login_at: None,
        }
    }
}
