//! Configuration types and CLI options.
//!
//! This module defines the command-line/environment surface (`Cli`) and the
//! immutable runtime configuration (`MonitorConfig`) built from it once at startup.

use std::fmt;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CHECK_INTERVAL_MINUTES, DEFAULT_STATUS_API_URL, DEFAULT_TELEGRAM_API_URL,
    DEFAULT_USER_AGENT, MAX_CHECK_INTERVAL_MINUTES, MAX_REQUEST_TIMEOUT_SECS,
    STATUS_REQUEST_TIMEOUT_SECS,
};
use crate::error_handling::{ConfigError, InitializationError};
use crate::notify::ChatId;
use crate::status::Domain;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Telegram bot token.
///
/// Opaque credential handed to the Telegram client. Never parsed, never printed:
/// the `Debug` implementation redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    /// Wraps a raw token, rejecting blank values.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

/// Command-line options and environment configuration.
///
/// Every option can be given as a flag or through the environment variable
/// named next to it (a `.env` file is loaded before parsing).
///
/// # Examples
///
/// ```bash
/// # Everything from the environment
/// TELEGRAM_BOT_TOKEN=... ADMIN_CHAT_ID=12345 DOMAINS_TO_CHECK="a.com, b.com" blockwatch
///
/// # Run a single report and exit (cron style)
/// blockwatch --once --interval-minutes 60
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "blockwatch",
    about = "Checks whether domains are blocked and reports to a Telegram admin chat."
)]
pub struct Cli {
    /// Telegram bot token (required)
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: Option<String>,

    /// Chat ID that receives reports and may trigger them manually (group IDs are negative)
    #[arg(long, env = "ADMIN_CHAT_ID", allow_hyphen_values = true)]
    pub admin_chat_id: Option<String>,

    /// Comma-separated list of domains to check
    #[arg(long, env = "DOMAINS_TO_CHECK")]
    pub domains: Option<String>,

    /// Minutes between scheduled reports
    #[arg(long, env = "CHECK_INTERVAL_MINUTES", default_value_t = DEFAULT_CHECK_INTERVAL_MINUTES)]
    pub interval_minutes: u64,

    /// Base URL of the block status API
    #[arg(long, env = "STATUS_API_URL", default_value = DEFAULT_STATUS_API_URL)]
    pub status_api_url: String,

    /// Base URL of the Telegram Bot API
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API_URL)]
    pub telegram_api_url: String,

    /// Per-request timeout for the status API, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = STATUS_REQUEST_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Run one report cycle and exit instead of starting the scheduler and bot
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    /// Returns the bot token or fails if it is missing or blank.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::MissingCredential` so the binary can abort
    /// before anything else starts.
    pub fn bot_token(&self) -> Result<BotToken, InitializationError> {
        self.bot_token
            .as_deref()
            .and_then(BotToken::new)
            .ok_or(InitializationError::MissingCredential("TELEGRAM_BOT_TOKEN"))
    }

    /// Builds the immutable monitor configuration.
    ///
    /// A missing admin ID or domain list is not an error here; scheduled cycles
    /// degrade to no-ops instead.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the status API URL does not parse or the
    /// interval or timeout is zero or above its maximum.
    pub fn monitor_config(&self) -> Result<MonitorConfig, ConfigError> {
        url::Url::parse(&self.status_api_url)
            .map_err(|e| ConfigError::InvalidUrl(self.status_api_url.clone(), e))?;
        let interval_minutes = check_duration(
            "interval-minutes",
            self.interval_minutes,
            MAX_CHECK_INTERVAL_MINUTES,
        )?;
        let request_timeout_secs = check_duration(
            "request-timeout-secs",
            self.request_timeout_secs,
            MAX_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(MonitorConfig {
            admin_chat_id: self.admin_chat_id.as_deref().and_then(ChatId::parse),
            domains: self
                .domains
                .as_deref()
                .map(parse_domain_list)
                .unwrap_or_default(),
            check_interval: Duration::from_secs(interval_minutes * 60),
            status_api_url: self.status_api_url.clone(),
            request_timeout: Duration::from_secs(request_timeout_secs),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }
}

// Durations must be non-zero and bounded so later Instant arithmetic cannot overflow.
fn check_duration(name: &'static str, value: u64, max: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroDuration(name));
    }
    if value > max {
        return Err(ConfigError::DurationTooLong { name, value, max });
    }
    Ok(value)
}

/// Runtime configuration shared by every component.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Recipient of reports and the only identity allowed to trigger one manually
    pub admin_chat_id: Option<ChatId>,

    /// Domains to check, in report order
    pub domains: Vec<Domain>,

    /// Interval between scheduled reports
    pub check_interval: Duration,

    /// Base URL of the block status API
    pub status_api_url: String,

    /// Per-request timeout for the status API
    pub request_timeout: Duration,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            admin_chat_id: None,
            domains: Vec::new(),
            check_interval: Duration::from_secs(DEFAULT_CHECK_INTERVAL_MINUTES * 60),
            status_api_url: DEFAULT_STATUS_API_URL.to_string(),
            request_timeout: Duration::from_secs(STATUS_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Splits a comma-separated domain list.
///
/// Entries are trimmed; blank entries (trailing commas, doubled separators) are dropped.
/// Order is preserved and duplicates are kept.
pub fn parse_domain_list(raw: &str) -> Vec<Domain> {
    raw.split(',').filter_map(Domain::parse).collect()
}
