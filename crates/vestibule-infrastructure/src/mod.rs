//! # Infrastructure Layer
//!
//! Technical implementations of the domain ports plus the cross-cutting
//! concerns every binary needs at startup.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | bcrypt/Argon2 password hashing, HS256 session tokens |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`persistence`] | SQLite credential store and schema bootstrap |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;
pub mod persistence;
pub mod utils;

// Re-export commonly used types
pub use error_ext::ErrorContext;
pub use utils::SystemClock;
