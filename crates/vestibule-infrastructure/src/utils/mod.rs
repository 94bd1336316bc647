//! Infrastructure utilities

/// Wall-clock implementation of the clock port
pub mod clock;

pub use clock::SystemClock;
