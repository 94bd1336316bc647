//! Signed session token

use std::fmt;

use serde::Serialize;

/// Compact `header.payload.signature` session token
///
/// Opaque to everything except the token verifier. `Debug` shows only the
/// length; the full value is reachable through [`SignedToken::as_str`].
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignedToken(String);

impl SignedToken {
    /// Wrap an encoded token
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the encoded string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignedToken(len={})", self.0.len())
    }
}
