//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{AuthConfig, LoggingConfig, ServerConfig, StorageConfig};

/// Root configuration, one field per TOML section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener and CORS
    pub server: ServerConfig,
    /// Session tokens and password hashing
    pub auth: AuthConfig,
    /// Credential database
    pub storage: StorageConfig,
    /// Logging output
    pub logging: LoggingConfig,
}
