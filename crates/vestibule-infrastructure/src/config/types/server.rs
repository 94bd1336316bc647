//! Server configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{CORS_DEFAULT_ORIGINS, DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST};

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Cross-origin settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin resource sharing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Attach CORS headers to responses
    pub enabled: bool,
    /// Origins allowed to call the API; `*` reflects any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: CORS_DEFAULT_ORIGINS.iter().map(|o| (*o).to_string()).collect(),
        }
    }
}
