//! HS256 session tokens
//!
//! Issues and verifies compact JWS tokens signed with the process secret.
//! `jsonwebtoken` performs the HMAC and constant-time comparison; structure,
//! the pinned algorithm and the time window are checked here so every
//! rejection maps to exactly one [`TokenError`] kind.

use std::collections::HashSet;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::TimeDelta;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::Deserialize;
use tracing::debug;
use vestibule_domain::constants::{
    SESSION_TOKEN_ALGORITHM, SESSION_TOKEN_SEGMENTS, SESSION_TOKEN_TYPE,
};
use vestibule_domain::entities::Identity;
use vestibule_domain::error::{Error, Result, TokenError};
use vestibule_domain::ports::{Clock, TokenIssuer, TokenVerifier};
use vestibule_domain::value_objects::{SessionClaims, SignedToken, SigningSecret};

use crate::error_ext::ErrorContext;

/// The only header field the verifier reads before the signature check
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Session token issuer and verifier
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtTokenService {
    /// Create a token service keyed by `secret`
    pub fn new(secret: &SigningSecret, clock: Arc<dyn Clock>) -> Self {
        // Signature and claim shape only; the time window is checked against
        // the injected clock instead of jsonwebtoken's system time
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
        }
    }

    fn check_structure(token: &str) -> std::result::Result<&str, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != SESSION_TOKEN_SEGMENTS
            || segments.iter().any(|segment| !is_base64url(segment))
        {
            return Err(TokenError::Malformed);
        }
        Ok(segments[0])
    }

    fn check_algorithm(header_segment: &str) -> std::result::Result<(), TokenError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(header_segment)
            .map_err(|_| TokenError::Malformed)?;
        let header: RawHeader =
            serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)?;
        if header.alg == SESSION_TOKEN_ALGORITHM {
            Ok(())
        } else {
            Err(TokenError::UnsupportedAlgorithm)
        }
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, identity: &Identity, ttl: TimeDelta) -> Result<SignedToken> {
        // Claims carry whole seconds
        if ttl < TimeDelta::seconds(1) {
            return Err(Error::signing("Session ttl must be at least one second"));
        }

        let claims = SessionClaims::for_identity(identity, self.clock.now(), ttl);
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some(SESSION_TOKEN_TYPE.to_string());

        let token = encode(&header, &claims, &self.encoding_key)
            .signing_context("Failed to sign session token")?;
        Ok(SignedToken::new(token))
    }
}

impl TokenVerifier for JwtTokenService {
    fn verify(&self, token: &str) -> std::result::Result<SessionClaims, TokenError> {
        let header_segment = Self::check_structure(token)?;
        Self::check_algorithm(header_segment)?;

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::InvalidAlgorithm => TokenError::UnsupportedAlgorithm,
                _ => TokenError::Malformed,
            })?
            .claims;

        let now = self.clock.now();
        if claims.is_expired_at(now) {
            debug!(subject = %claims.sub, "Rejected expired session token");
            return Err(TokenError::Expired);
        }
        if claims.is_premature_at(now) {
            debug!(subject = %claims.sub, "Rejected session token issued in the future");
            return Err(TokenError::NotYetValid);
        }
        Ok(claims)
    }
}

fn is_base64url(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
