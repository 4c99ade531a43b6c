//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, report texts)
//! - CLI/environment option parsing
//! - The immutable runtime configuration shared by all components

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_domain_list, BotToken, Cli, LogFormat, LogLevel, MonitorConfig};
