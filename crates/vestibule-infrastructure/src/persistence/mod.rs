//! Persistence adapters
//!
//! The SQLite credential store and its schema bootstrap.

pub mod sqlite_store;

pub use sqlite_store::SqliteCredentialStore;
