//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP clients used for the
//! status API and for the Telegram Bot API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{MonitorConfig, TELEGRAM_POLL_TIMEOUT_SECS};

/// Initializes the HTTP client for the status API.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - The per-request timeout from the configuration (a slower answer is an error
///   for that domain, never a hang)
/// - Rustls TLS backend (no native TLS)
///
/// # Arguments
///
/// * `config` - Monitor configuration containing user-agent and timeout settings
///
/// # Returns
///
/// A shared HTTP client ready for status API lookups.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &MonitorConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client for the Telegram Bot API.
///
/// The overall timeout leaves room for `getUpdates` long polling; `sendMessage`
/// calls set a shorter per-request timeout on top of it.
///
/// # Arguments
///
/// * `user_agent` - User-Agent header value
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_telegram_client(user_agent: &str) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(TELEGRAM_POLL_TIMEOUT_SECS + 10))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent.to_string())
        .build()
}
