//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by infrastructure failures
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Vestibule
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid process configuration. Fatal at startup.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The credential store is unavailable or returned an unexpected failure
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A registration collided with an existing username
    #[error("Username already exists: {username}")]
    DuplicateUsername {
        /// The username that was already taken
        username: String,
    },

    /// Unknown username or wrong password. The two cases are deliberately
    /// indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Client supplied input that can never be stored
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// Session token verification failed
    #[error("Token rejected: {0}")]
    Token(#[from] TokenError),

    /// Password hashing failed
    #[error("Password hashing failed: {message}")]
    Hashing {
        /// Description of the hashing failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// A stored password hash could not be parsed
    #[error("Malformed password hash: {message}")]
    MalformedHash {
        /// Description of the parse failure
        message: String,
    },

    /// Session token signing failed
    #[error("Token signing failed: {message}")]
    Signing {
        /// Description of the signing failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

/// Reasons a presented session token is refused
///
/// Verification short-circuits in declaration order, so a token is reported
/// with the first check it fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenError {
    /// Not three well-formed segments, or the claims are incomplete
    #[error("malformed token")]
    Malformed,
    /// Header declares an algorithm other than the pinned HMAC algorithm
    #[error("unsupported signing algorithm")]
    UnsupportedAlgorithm,
    /// Signature does not match the process secret
    #[error("signature mismatch")]
    BadSignature,
    /// Current time is past the expiry
    #[error("token expired")]
    Expired,
    /// Current time is before the issue time
    #[error("token not yet valid")]
    NotYetValid,
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Storage error creation methods
impl Error {
    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with source
    pub fn storage_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a duplicate username error
    pub fn duplicate_username<S: Into<String>>(username: S) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }
}

// Credential and token error creation methods
impl Error {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a hashing error
    pub fn hashing<S: Into<String>>(message: S) -> Self {
        Self::Hashing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed hash error
    pub fn malformed_hash<S: Into<String>>(message: S) -> Self {
        Self::MalformedHash {
            message: message.into(),
        }
    }

    /// Create a signing error
    pub fn signing<S: Into<String>>(message: S) -> Self {
        Self::Signing {
            message: message.into(),
            source: None,
        }
    }

    /// Create a signing error with source
    pub fn signing_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Signing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Verifier failure kind, if this is a token error
    pub fn token_kind(&self) -> Option<TokenError> {
        match self {
            Self::Token(kind) => Some(*kind),
            _ => None,
        }
    }
}

// I/O and internal error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_with_source(err.to_string(), err)
    }
}
