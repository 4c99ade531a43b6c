//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP clients (status API and Telegram Bot API)
//! - Logger

mod client;
mod logger;

// Re-export public API
pub use client::{init_client, init_telegram_client};
pub use logger::init_logger_with;
