//! Account Service Use Case
//!
//! Registration and login over the credential store, password hasher and
//! token issuer ports. Every port call is synchronous and potentially slow
//! (bcrypt, disk), so each use case runs on tokio's blocking pool.

use std::fmt;
use std::sync::Arc;

use chrono::TimeDelta;
use tracing::{info, warn};
use vestibule_domain::constants::MAX_PASSWORD_BYTES;
use vestibule_domain::entities::Identity;
use vestibule_domain::error::{Error, Result};
use vestibule_domain::ports::{Clock, CredentialStore, PasswordHashing, TokenIssuer};
use vestibule_domain::value_objects::SignedToken;

/// Registration input
pub struct Registration {
    /// Requested login name; surrounding whitespace is ignored
    pub username: String,
    /// Contact email
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

impl Registration {
    /// Trim and check the fields, rejecting anything that must never be stored
    fn normalized(self) -> Result<Self> {
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_string();
        if username.is_empty() {
            return Err(Error::invalid_input("username must not be empty"));
        }
        if email.is_empty() {
            return Err(Error::invalid_input("email must not be empty"));
        }
        if self.password.is_empty() {
            return Err(Error::invalid_input("password must not be empty"));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(Error::invalid_input(format!(
                "password must be at most {MAX_PASSWORD_BYTES} bytes"
            )));
        }
        Ok(Self {
            username,
            email,
            password: self.password,
        })
    }
}

/// A successful login
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Signed session token for the `Authorization` header
    pub token: SignedToken,
    /// The authenticated identity
    pub identity: Identity,
}

/// Registration and login orchestration
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<dyn PasswordHashing>,
    issuer: Arc<dyn TokenIssuer>,
    clock: Arc<dyn Clock>,
    session_ttl: TimeDelta,
}

impl AccountService {
    /// Create a new account service with injected dependencies
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<dyn PasswordHashing>,
        issuer: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
        session_ttl: TimeDelta,
    ) -> Self {
        Self {
            store,
            hasher,
            issuer,
            clock,
            session_ttl,
        }
    }

    /// Lifetime of issued session tokens
    pub fn session_ttl(&self) -> TimeDelta {
        self.session_ttl
    }

    /// Register a new identity
    ///
    /// Fails with `InvalidInput` for empty fields or an over-long password,
    /// and `DuplicateUsername` when the name is taken.
    pub async fn register(&self, registration: Registration) -> Result<Identity> {
        let registration = registration.normalized()?;
        let store = Arc::clone(&self.store);

        let identity = run_blocking(move || {
            store.create(
                &registration.username,
                &registration.email,
                &registration.password,
            )
        })
        .await?;

        info!(uuid = %identity.uuid, username = %identity.username, "Registered new identity");
        Ok(identity)
    }

    /// Check credentials and issue a session token
    ///
    /// An unknown username, a wrong password and a deactivated account all
    /// fail with the same `InvalidCredentials` error.
    pub async fn login(&self, username: String, password: String) -> Result<IssuedSession> {
        let service = self.clone();
        run_blocking(move || service.login_blocking(username.trim(), &password)).await
    }

    fn login_blocking(&self, username: &str, password: &str) -> Result<IssuedSession> {
        let Some(identity) = self.store.find_by_username(username)? else {
            // Spend the same hashing time as a real verification
            let _ = self.hasher.hash(password);
            return Err(Error::InvalidCredentials);
        };

        if !self.hasher.verify(password, &identity.password_hash)? || !identity.is_active {
            return Err(Error::InvalidCredentials);
        }

        let token = self.issuer.issue(&identity, self.session_ttl)?;

        match self.store.record_login(&identity.uuid, self.clock.now()) {
            Ok(true) => {}
            Ok(false) => warn!(uuid = %identity.uuid, "Login stamp matched no identity"),
            Err(e) => warn!(uuid = %identity.uuid, error = %e, "Failed to record login"),
        }

        info!(uuid = %identity.uuid, "Issued session token");
        Ok(IssuedSession { token, identity })
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| Error::internal(format!("Blocking task failed: {e}")))?
}
