//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod storage;

pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig, PasswordAlgorithm, PasswordConfig};
pub use logging::LoggingConfig;
pub use server::{CorsConfig, ServerConfig};
pub use storage::StorageConfig;
