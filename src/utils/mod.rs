//! Configuration utilities.

/// Environment-driven configuration.
pub mod config;
