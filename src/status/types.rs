//! Status data types.

use std::fmt;

use crate::config::{LABEL_BLOCKED, LABEL_ERROR, LABEL_NOT_BLOCKED, LABEL_NOT_FOUND};

/// A monitored hostname.
///
/// Only surrounding whitespace is removed; case and everything else is passed to
/// the status API untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Trims `raw` and returns `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
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

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verdict for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainStatus {
    /// The API flags the domain as blocked
    Blocked,
    /// The API knows the domain and it is not blocked
    NotBlocked,
    /// The API answered but the domain is not in its payload
    NotFound,
    /// The lookup failed (network, timeout, HTTP status, malformed payload)
    Error,
}

impl DomainStatus {
    /// Text shown after the domain in a report line.
    pub fn label(&self) -> &'static str {
        match self {
            DomainStatus::Blocked => LABEL_BLOCKED,
            DomainStatus::NotBlocked => LABEL_NOT_BLOCKED,
            DomainStatus::NotFound => LABEL_NOT_FOUND,
            DomainStatus::Error => LABEL_ERROR,
        }
    }
}

/// One rendered line of a report: a domain and its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    domain: Domain,
    status: DomainStatus,
}

impl StatusLine {
    pub fn new(domain: Domain, status: DomainStatus) -> Self {
        Self { domain, status }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn status(&self) -> DomainStatus {
        self.status
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.domain, self.status.label())
    }
}
