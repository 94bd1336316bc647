//! Use case implementations

/// Registration and login
pub mod account_service;

pub use account_service::{AccountService, IssuedSession, Registration};
