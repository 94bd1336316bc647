//! Application Layer - Vestibule
//!
//! Orchestrates the domain ports into the two account use cases:
//! registration and login.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `vestibule-domain`: entities, value objects, ports and errors
//! - `tokio` for moving blocking port calls off the async workers

pub mod use_cases;

pub use use_cases::*;
