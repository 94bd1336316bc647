//! Server Initialization
//!
//! Loads configuration, installs logging, wires the adapters into the
//! account service and launches Rocket.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use vestibule_application::AccountService;
use vestibule_domain::error::{Error, Result};
use vestibule_domain::ports::{Clock, PasswordHashing};
use vestibule_domain::value_objects::SigningSecret;
use vestibule_infrastructure::SystemClock;
use vestibule_infrastructure::config::{AppConfig, ConfigLoader};
use vestibule_infrastructure::crypto::{JwtTokenService, PasswordService};
use vestibule_infrastructure::logging::init_logging;
use vestibule_infrastructure::persistence::SqliteCredentialStore;

use crate::routes::build_rocket;
use crate::state::AppState;

/// Run the Vestibule server until shutdown
///
/// Any configuration problem, including a missing signing secret, aborts
/// before the listener is bound.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    let state = build_state(&config)?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        database = %config.storage.database_path.display(),
        "Starting Vestibule server"
    );

    build_rocket(state, &config.server)
        .launch()
        .await
        .map_err(|e| Error::internal(format!("HTTP server failed: {e}")))?;

    info!("Vestibule server stopped");
    Ok(())
}

/// Load configuration from optional path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Construct the request services from configuration
pub fn build_state(config: &AppConfig) -> Result<AppState> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let secret = SigningSecret::new(config.auth.jwt.secret.clone())?;
    let hasher: Arc<dyn PasswordHashing> =
        Arc::new(PasswordService::from_config(&config.auth.password)?);
    let store = Arc::new(SqliteCredentialStore::open(
        &config.storage.database_path,
        Arc::clone(&hasher),
        Arc::clone(&clock),
    )?);
    let tokens = Arc::new(JwtTokenService::new(&secret, Arc::clone(&clock)));

    let accounts = AccountService::new(
        store,
        hasher,
        tokens.clone(),
        clock,
        config.auth.jwt.session_ttl()?,
    );
    Ok(AppState::new(accounts, tokens))
}
