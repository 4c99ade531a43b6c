//! Error categorization.
//!
//! Maps lookup failures to a `FailureKind` so the log line says what went wrong.
//! The categorization never changes the verdict: every failure is still reported
//! as an error for the domain.

use super::types::{FailureKind, LookupError};

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status codes are checked first, then the reqwest error flags in order of
/// specificity (a timeout is also a request error, so it is checked before).
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.status().is_some() || error.is_status() {
        FailureKind::HttpStatus
    } else if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_decode() || error.is_body() {
        FailureKind::Decode
    } else if error.is_request() || error.is_builder() || error.is_redirect() {
        FailureKind::Request
    } else {
        FailureKind::Other
    }
}

/// Categorizes a `LookupError` into a `FailureKind`.
pub fn categorize_lookup_error(error: &LookupError) -> FailureKind {
    match error {
        LookupError::Request(e) => categorize_reqwest_error(e),
        LookupError::BadStatus(_) => FailureKind::HttpStatus,
        LookupError::MalformedPayload(_) => FailureKind::MalformedPayload,
    }
}
