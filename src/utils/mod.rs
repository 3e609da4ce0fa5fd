//! Shared helpers: logging setup and timing.

pub mod logger;
pub mod timer;
