//! Shared request state

use std::sync::Arc;

use vestibule_application::AccountService;
use vestibule_domain::ports::TokenVerifier;

/// Services shared by every request, managed by Rocket
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub accounts: AccountService,
    /// Bearer token verification for the authentication gate
    pub verifier: Arc<dyn TokenVerifier>,
}

impl AppState {
    /// Bundle the request services
    pub fn new(accounts: AccountService, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { accounts, verifier }
    }
}
