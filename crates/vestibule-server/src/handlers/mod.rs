//! Route handlers

/// Registration, login and current-identity routes
pub mod auth;
/// Liveness route
pub mod health;
