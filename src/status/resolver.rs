//! Domain status resolution against the block status API.
//!
//! A lookup is a single `GET <base>?domain=<domain>&json=true`. The answer is a
//! JSON object keyed by domain:
//!
//! ```json
//! { "example.com": { "blocked": true } }
//! ```
//!
//! Every failure is logged and reported as `DomainStatus::Error`; nothing is
//! retried and nothing propagates to the caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::types::{Domain, DomainStatus, StatusLine};
use crate::config::MonitorConfig;
use crate::error_handling::{categorize_lookup_error, InitializationError, LookupError};
use crate::initialization::init_client;

/// Resolves the block status of a single domain.
///
/// Implementations must not fail: any problem is expressed as `DomainStatus::Error`.
#[async_trait]
pub trait StatusResolver: Send + Sync {
    /// Returns the verdict for `domain`.
    async fn resolve(&self, domain: &Domain) -> DomainStatus;

    /// Resolves `domain` and pairs it with its verdict.
    async fn check_line(&self, domain: &Domain) -> StatusLine {
        StatusLine::new(domain.clone(), self.resolve(domain).await)
    }
}

/// `StatusResolver` backed by the HTTP status API.
#[derive(Debug, Clone)]
pub struct HttpStatusResolver {
    client: Arc<reqwest::Client>,
    base_url: String,
    timeout: Duration,
}

impl HttpStatusResolver {
    /// Creates a resolver using an existing client.
    ///
    /// `timeout` bounds each request on top of whatever the client enforces.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Creates a resolver with a dedicated client built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &MonitorConfig) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::new(
            client,
            config.status_api_url.clone(),
            config.request_timeout,
        ))
    }

    async fn lookup(&self, domain: &Domain) -> Result<DomainStatus, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("domain", domain.as_str()), ("json", "true")])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::BadStatus(status.as_u16()));
        }

        let payload: Value = response.json().await?;
        verdict_from_payload(domain, &payload)
    }
}

#[async_trait]
impl StatusResolver for HttpStatusResolver {
    async fn resolve(&self, domain: &Domain) -> DomainStatus {
        match self.lookup(domain).await {
            Ok(status) => {
                log::debug!("{}: {:?}", domain, status);
                status
            }
            Err(e) => {
                log::error!(
                    "Error checking {} ({}): {}",
                    domain,
                    categorize_lookup_error(&e),
                    e
                );
                DomainStatus::Error
            }
        }
    }
}

/// Maps a decoded status API payload to a verdict.
///
/// # Errors
///
/// Returns `LookupError::MalformedPayload` if the payload or the domain's entry
/// is not a JSON object.
pub fn verdict_from_payload(domain: &Domain, payload: &Value) -> Result<DomainStatus, LookupError> {
    let entries = payload.as_object().ok_or_else(|| {
        LookupError::MalformedPayload("top-level value is not an object".to_string())
    })?;

    let Some(entry) = entries.get(domain.as_str()) else {
        return Ok(DomainStatus::NotFound);
    };

    let entry = entry.as_object().ok_or_else(|| {
        LookupError::MalformedPayload(format!("entry for {} is not an object", domain))
    })?;

    let blocked = entry.get("blocked").map(is_truthy).unwrap_or(false);
    Ok(if blocked {
        DomainStatus::Blocked
    } else {
        DomainStatus::NotBlocked
    })
}

/// Truthiness of a "boolean-like" JSON field.
///
/// `null`, `false`, zero, and empty strings/arrays/objects are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
