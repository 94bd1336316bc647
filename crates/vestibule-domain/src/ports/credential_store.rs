//! Credential Store Port
//!
//! Durable persistence of identities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::Identity;
use crate::error::Result;

/// Durable identity persistence
///
/// Implementations must be safe to share across request workers and must
/// bind every caller-supplied value as a statement parameter.
pub trait CredentialStore: Send + Sync {
    /// Hash `password` and persist a new identity under a fresh uuid
    ///
    /// Returns `Error::DuplicateUsername` when the username is taken; the
    /// store is left unchanged in that case.
    fn create(&self, username: &str, email: &str, password: &str) -> Result<Identity>;

    /// Look up an identity by exact, case-sensitive username
    fn find_by_username(&self, username: &str) -> Result<Option<Identity>>;

    /// Look up an identity by its public uuid
    fn find_by_uuid(&self, uuid: &Uuid) -> Result<Option<Identity>>;

    /// Stamp the last successful login
    ///
    /// Returns `false` when no identity has that uuid.
    fn record_login(&self, uuid: &Uuid, at: DateTime<Utc>) -> Result<bool>;
}
