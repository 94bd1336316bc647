//! Domain layer constants
//!
//! Protocol-level values that every layer must agree on. Tunables with
//! defaults that operators may override live in the infrastructure
//! constants instead.

// ============================================================================
// SESSION TOKEN CONSTANTS
// ============================================================================

/// The only signing algorithm a session token may declare
pub const SESSION_TOKEN_ALGORITHM: &str = "HS256";

/// Token type declared in the session token header
pub const SESSION_TOKEN_TYPE: &str = "JWT";

/// Number of dot-separated segments in a compact session token
pub const SESSION_TOKEN_SEGMENTS: usize = 3;

/// Default session lifetime in seconds (24 hours)
pub const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

/// Minimum signing secret length in bytes
pub const MIN_SIGNING_SECRET_LENGTH: usize = 32;

// ============================================================================
// CREDENTIAL CONSTANTS
// ============================================================================

/// Longest password accepted, in bytes
///
/// bcrypt keys on at most 72 bytes including a trailing NUL; anything longer
/// would be silently truncated.
pub const MAX_PASSWORD_BYTES: usize = 71;

// ============================================================================
// REQUEST AUTHENTICATION CONSTANTS
// ============================================================================

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Bearer scheme prefix, including the separating space
pub const BEARER_PREFIX: &str = "Bearer ";
