//! Password hashing with bcrypt and Argon2id
//!
//! New hashes use the configured algorithm. Verification detects the
//! algorithm from the stored hash prefix, so changing the configured
//! algorithm does not strand existing users.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use bcrypt::BcryptError;
use vestibule_domain::constants::MAX_PASSWORD_BYTES;
use vestibule_domain::error::{Error, Result};
use vestibule_domain::ports::PasswordHashing;
use vestibule_domain::value_objects::HashedSecret;

use crate::config::{PasswordAlgorithm, PasswordConfig};
use crate::constants::{BCRYPT_DEFAULT_COST, BCRYPT_MAX_COST, BCRYPT_MIN_COST};

/// Hash families recognized by their encoded prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// `$2a$`, `$2b$`, `$2x$` or `$2y$`
    Bcrypt,
    /// `$argon2id$`, `$argon2i$` or `$argon2d$`
    Argon2,
}

impl HashScheme {
    /// Detect the scheme of an encoded hash
    pub fn detect(encoded: &str) -> Option<Self> {
        if encoded.starts_with("$argon2") {
            Some(Self::Argon2)
        } else if ["$2a$", "$2b$", "$2x$", "$2y$"]
            .iter()
            .any(|prefix| encoded.starts_with(prefix))
        {
            Some(Self::Bcrypt)
        } else {
            None
        }
    }
}

/// Password hashing service
#[derive(Clone)]
pub struct PasswordService {
    algorithm: PasswordAlgorithm,
    bcrypt_cost: u32,
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a password service
    ///
    /// Returns `Error::Configuration` if `bcrypt_cost` is outside 4..=31.
    pub fn new(algorithm: PasswordAlgorithm, bcrypt_cost: u32) -> Result<Self> {
        if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&bcrypt_cost) {
            return Err(Error::configuration(format!(
                "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}, got {bcrypt_cost}"
            )));
        }
        Ok(Self {
            algorithm,
            bcrypt_cost,
            argon2: Argon2::default(),
        })
    }

    /// Create from the `auth.password` configuration section
    pub fn from_config(config: &PasswordConfig) -> Result<Self> {
        Self::new(config.algorithm, config.bcrypt_cost)
    }

    fn hash_bcrypt(&self, password: &str) -> Result<String> {
        bcrypt::non_truncating_hash(password, self.bcrypt_cost).map_err(|e| match e {
            BcryptError::Truncation(_) => Error::invalid_input(format!(
                "password must be at most {MAX_PASSWORD_BYTES} bytes"
            )),
            e => Error::Hashing {
                message: "bcrypt hashing failed".to_string(),
                source: Some(Box::new(e)),
            },
        })
    }

    fn hash_argon2(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::hashing(format!("Argon2 hashing failed: {e}")))
    }

    fn verify_bcrypt(password: &str, encoded: &str) -> Result<bool> {
        match bcrypt::non_truncating_verify(password, encoded) {
            Ok(matched) => Ok(matched),
            // Too long to ever have been hashed, so it cannot match
            Err(BcryptError::Truncation(_)) => Ok(false),
            Err(e) => Err(Error::malformed_hash(format!("Unreadable bcrypt hash: {e}"))),
        }
    }

    fn verify_argon2(&self, password: &str, encoded: &str) -> Result<bool> {
        let parsed = PasswordHash::new(encoded)
            .map_err(|e| Error::malformed_hash(format!("Unreadable Argon2 hash: {e}")))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Bcrypt,
            bcrypt_cost: BCRYPT_DEFAULT_COST,
            argon2: Argon2::default(),
        }
    }
}

impl PasswordHashing for PasswordService {
    fn hash(&self, password: &str) -> Result<HashedSecret> {
        let encoded = match self.algorithm {
            PasswordAlgorithm::Bcrypt => self.hash_bcrypt(password)?,
            PasswordAlgorithm::Argon2 => self.hash_argon2(password)?,
        };
        Ok(HashedSecret::new(encoded))
    }

    fn verify(&self, password: &str, hashed: &HashedSecret) -> Result<bool> {
        let encoded = hashed.as_str();
        match HashScheme::detect(encoded) {
            Some(HashScheme::Bcrypt) => Self::verify_bcrypt(password, encoded),
            Some(HashScheme::Argon2) => self.verify_argon2(password, encoded),
            None => Err(Error::malformed_hash("Unknown password hash format")),
        }
    }
}
