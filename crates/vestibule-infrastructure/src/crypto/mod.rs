//! Cryptographic services
//!
//! Password hashing and session token signing behind the domain ports.

pub mod password;
pub mod token;

pub use password::{HashScheme, PasswordService};
pub use token::JwtTokenService;
