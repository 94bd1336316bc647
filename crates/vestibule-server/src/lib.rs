//! # Vestibule Server
//!
//! HTTP surface for the Vestibule credential and session subsystem.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Defaults + vestibule.toml + VESTIBULE__* environment
//!     vestibule_server::run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Authenticated`] | Request guard that admits only valid bearer tokens |
//! | [`AppState`] | Services shared by every request |
//! | [`ApiError`] | Maps domain errors onto JSON error responses |
//!
//! ## Routes
//!
//! | Method | Path | Guard |
//! |--------|------|-------|
//! | POST | `/auth/register` | none |
//! | POST | `/auth/login` | none |
//! | GET | `/auth/me` | [`Authenticated`] |
//! | GET | `/health` | none |

pub mod auth;
pub mod catchers;
pub mod error;
pub mod fairings;
pub mod handlers;
pub mod init;
pub mod routes;
pub mod state;

pub use auth::{Authenticated, GateRejection};
pub use error::ApiError;
pub use init::run;
pub use routes::build_rocket;
pub use state::AppState;
