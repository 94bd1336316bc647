//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use vestibule_domain::constants::MIN_SIGNING_SECRET_LENGTH;
use vestibule_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    BCRYPT_MAX_COST, BCRYPT_MIN_COST, CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR,
    DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, JWT_SECRET_ENV_FALLBACK,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. The bare `JWT_SECRET` variable, mapped onto `auth.jwt.secret`
    /// 4. Prefixed environment variables (e.g., `VESTIBULE__SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::raw()
                .only(&[JWT_SECRET_ENV_FALLBACK])
                .map(|_| "auth.jwt.secret".into()),
        );

        // Double underscore separates nested keys so single underscores can
        // appear in field names (e.g., VESTIBULE__AUTH__JWT__EXPIRATION_SECS)
        figment = figment.merge(
            Env::prefixed(&format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Every failure is a `Configuration` error; the process must not serve
/// traffic with an invalid configuration.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_auth_config(config)?;
    validate_storage_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(Error::configuration("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_auth_config(config: &AppConfig) -> Result<()> {
    let jwt = &config.auth.jwt;
    if jwt.secret.is_empty() {
        return Err(Error::configuration(format!(
            "JWT secret is required: set {CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}AUTH{CONFIG_ENV_SEPARATOR}JWT{CONFIG_ENV_SEPARATOR}SECRET, {JWT_SECRET_ENV_FALLBACK}, or auth.jwt.secret"
        )));
    }
    if jwt.secret.len() < MIN_SIGNING_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "JWT secret must be at least {MIN_SIGNING_SECRET_LENGTH} characters long"
        )));
    }
    jwt.session_ttl()?;

    let cost = config.auth.password.bcrypt_cost;
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
        return Err(Error::configuration(format!(
            "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}, got {cost}"
        )));
    }
    Ok(())
}

fn validate_storage_config(config: &AppConfig) -> Result<()> {
    if config.storage.database_path.as_os_str().is_empty() {
        return Err(Error::configuration("Database path cannot be empty"));
    }
    Ok(())
}
