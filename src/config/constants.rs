//! Configuration constants.
//!
//! This module defines the defaults and fixed texts used throughout the application:
//! endpoints, timeouts, the schedule interval, and the strings that make up a report.

use std::time::Duration;

// External endpoints
/// Default base URL of the domain block status API.
///
/// Queried as `GET <url>?domain=<domain>&json=true`.
pub const DEFAULT_STATUS_API_URL: &str = "https://check.skiddle.id/";
/// Default base URL of the Telegram Bot API.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

// Network operation timeouts
/// Status API request timeout in seconds.
/// A request that takes longer is reported as an error for that domain.
pub const STATUS_REQUEST_TIMEOUT_SECS: u64 = 10;
/// Telegram `sendMessage` request timeout in seconds
pub const TELEGRAM_SEND_TIMEOUT_SECS: u64 = 15;
/// Long-poll timeout passed to Telegram `getUpdates`, in seconds
pub const TELEGRAM_POLL_TIMEOUT_SECS: u64 = 30;
/// Longest accepted status API request timeout, in seconds
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 10 * 60;
/// Telegram rejects `sendMessage` texts longer than this many characters
pub const TELEGRAM_MAX_MESSAGE_CHARS: usize = 4096;
/// Pause before polling again after a failed `getUpdates` call
pub const POLL_ERROR_PAUSE: Duration = Duration::from_secs(5);

// Schedule
/// Default interval between scheduled reports, in minutes
pub const DEFAULT_CHECK_INTERVAL_MINUTES: u64 = 30;
/// Longest accepted interval between scheduled reports (one year), in minutes
pub const MAX_CHECK_INTERVAL_MINUTES: u64 = 365 * 24 * 60;

/// User-Agent sent to the status API and the Telegram Bot API.
pub const DEFAULT_USER_AGENT: &str = concat!("blockwatch/", env!("CARGO_PKG_VERSION"));

// Report texts
/// First line of every report
pub const REPORT_HEADER: &str = "📊 Domain Status Report:";
pub const LABEL_BLOCKED: &str = "🔴 Blocked";
pub const LABEL_NOT_BLOCKED: &str = "🟢 Not Blocked";
pub const LABEL_NOT_FOUND: &str = "⚠️ Domain not found in API response.";
pub const LABEL_ERROR: &str = "⚠️ Error fetching data.";

// Chat replies
pub const REPLY_START: &str = "Hello! I am online and the scheduler is running.";
pub const REPLY_ACK_REPORT: &str = "⏳ Generating report now...";
pub const REPLY_DENIED: &str = "⛔ You are not authorized to use this command.";
pub const REPLY_CHECK_USAGE: &str = "Usage: /check <domain>";
pub const REPLY_UNKNOWN_COMMAND: &str = "Unknown command. Send /help for the list of commands.";
pub const REPLY_HELP: &str = "Available commands:\n\
/check <domain> - check one domain now\n\
/report - send the full report to the admin now\n\
/getid - show your chat ID\n\
/help - show this message";
pub const REPLY_NO_DOMAINS: &str = "⚠️ No domains are configured, nothing to report.";
