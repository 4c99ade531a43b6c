//! Error type definitions.
//!
//! This module defines the error types used throughout the application. Only
//! `InitializationError` and `ConfigError` ever reach `main`; lookup and delivery
//! errors are absorbed by the component that produced them and logged.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A required credential is not configured.
    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),
}

/// Invalid configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configured base URL does not parse.
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] url::ParseError),

    /// A duration option was set to zero.
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    /// A duration option exceeds the accepted maximum.
    #[error("{name} must be at most {max} (got {value})")]
    DurationTooLong {
        name: &'static str,
        value: u64,
        max: u64,
    },
}

/// Failure while resolving the status of one domain.
///
/// Never leaves the resolver: it is logged and turned into
/// `DomainStatus::Error`.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request could not be completed (connect, timeout, body read, decode).
    #[error("request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The API answered with a non-success status code.
    #[error("status API returned HTTP {0}")]
    BadStatus(u16),

    /// The body decoded but does not have the expected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Failure while delivering a message through the chat transport.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The request never got a response.
    #[error("transport error: {0}")]
    Transport(#[from] ReqwestError),

    /// The API answered with a non-success status code.
    #[error("chat API returned HTTP {status}: {description}")]
    ApiStatus {
        /// HTTP status code
        status: u16,
        /// Description reported by the API, if any
        description: String,
    },

    /// The API answered 2xx but reported `ok: false`.
    #[error("chat API rejected the request: {0}")]
    Rejected(String),
}

/// Coarse classification of a failed lookup, used only for log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Timeout,
    Connect,
    HttpStatus,
    Decode,
    MalformedPayload,
    Request,
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connect => "connection error",
            FailureKind::HttpStatus => "HTTP status error",
            FailureKind::Decode => "decode error",
            FailureKind::MalformedPayload => "malformed payload",
            FailureKind::Request => "request error",
            FailureKind::Other => "other error",
        }
    }
}
