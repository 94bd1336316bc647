//! SQLite-backed credential store.
//!
//! One `users` table, bootstrapped with `CREATE TABLE IF NOT EXISTS` on open.
//! The connection sits behind a mutex so the store can be shared across
//! request workers; SQLite itself serializes the writes.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, params, types::Type};
use tracing::{debug, info, warn};
use uuid::Uuid;
use vestibule_domain::entities::Identity;
use vestibule_domain::error::{Error, Result};
use vestibule_domain::ports::{Clock, CredentialStore, PasswordHashing};
use vestibule_domain::value_objects::HashedSecret;

use crate::constants::IN_MEMORY_DATABASE_PATH;
use crate::error_ext::ErrorContext;

const SCHEMA: &str = include_str!("schema.sql");

const SELECT_IDENTITY: &str = "SELECT uuid, username, email, password_hash, created_at, \
     updated_at, is_active, last_login_at FROM users";

/// SQLite credential store
pub struct SqliteCredentialStore {
    conn: Mutex<Connection>,
    hasher: Arc<dyn PasswordHashing>,
    clock: Arc<dyn Clock>,
}

impl SqliteCredentialStore {
    /// Open (or create) the credential database at `path`
    ///
    /// Missing parent directories are created. `:memory:` opens a private
    /// in-memory database.
    pub fn open(
        path: &Path,
        hasher: Arc<dyn PasswordHashing>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        if path.as_os_str() == IN_MEMORY_DATABASE_PATH {
            return Self::open_in_memory(hasher, clock);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).io_context(format!(
                "Failed to create database directory {}",
                parent.display()
            ))?;
        }

        let conn = Connection::open(path)
            .storage_context(format!("Failed to open database {}", path.display()))?;

        // WAL mode for concurrent reads + crash safety
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .storage_context("Failed to configure database")?;

        let store = Self::with_connection(conn, hasher, clock)?;
        info!(path = %path.display(), "Credential store initialized");
        Ok(store)
    }

    /// Open a private in-memory database
    pub fn open_in_memory(
        hasher: Arc<dyn PasswordHashing>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let conn = Connection::open_in_memory()
            .storage_context("Failed to open in-memory database")?;
        Self::with_connection(conn, hasher, clock)
    }

    fn with_connection(
        conn: Connection,
        hasher: Arc<dyn PasswordHashing>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .storage_context("Failed to bootstrap credential schema")?;
        Ok(Self {
            conn: Mutex::new(conn),
            hasher,
            clock,
        })
    }

    fn find_one(&self, column: &str, value: &str) -> Result<Option<Identity>> {
        let conn = self.conn.lock();
        conn.query_row(
            &format!("{SELECT_IDENTITY} WHERE {column} = ?1"),
            params![value],
            identity_from_row,
        )
        .optional()
        .storage_context("Failed to look up identity")
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn create(&self, username: &str, email: &str, password: &str) -> Result<Identity> {
        let password_hash = self.hasher.hash(password)?;
        let identity = Identity::register(username, email, password_hash, self.clock.now());

        let conn = self.conn.lock();
        let result = conn.execute(
            "INSERT INTO users (uuid, username, email, password_hash, created_at, updated_at, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                identity.uuid.to_string(),
                identity.username,
                identity.email,
                identity.password_hash.as_str(),
                identity.created_at.timestamp(),
                identity.updated_at.timestamp(),
                identity.is_active,
            ],
        );

        match result {
            Ok(_) => {
                debug!(uuid = %identity.uuid, "Identity created");
                Ok(identity)
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                warn!("Registration rejected: username already taken");
                Err(Error::duplicate_username(username))
            }
            Err(e) => Err(Error::storage_with_source("Failed to insert identity", e)),
        }
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Identity>> {
        self.find_one("username", username)
    }

    fn find_by_uuid(&self, uuid: &Uuid) -> Result<Option<Identity>> {
        self.find_one("uuid", &uuid.to_string())
    }

    fn record_login(&self, uuid: &Uuid, at: DateTime<Utc>) -> Result<bool> {
        let conn = self.conn.lock();
        let changed = conn
            .execute(
                "UPDATE users SET last_login_at = ?1, updated_at = ?1 WHERE uuid = ?2",
                params![at.timestamp(), uuid.to_string()],
            )
            .storage_context("Failed to record login")?;
        Ok(changed > 0)
    }
}

fn identity_from_row(row: &Row<'_>) -> rusqlite::Result<Identity> {
    let uuid: String = row.get(0)?;
    let uuid = Uuid::parse_str(&uuid)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
    let last_login_at: Option<i64> = row.get(7)?;

    Ok(Identity {
        uuid,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: HashedSecret::new(row.get::<_, String>(3)?),
        created_at: timestamp(row.get(4)?, 4)?,
        updated_at: timestamp(row.get(5)?, 5)?,
        is_active: row.get(6)?,
        last_login_at: last_login_at.map(|secs| timestamp(secs, 7)).transpose()?,
    })
}

fn timestamp(secs: i64, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(column, secs))
}
