//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade;
//! `env_logger` is the only backend wired up.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
