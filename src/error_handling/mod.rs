//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, configuration, lookup and delivery
//! - Categorization of lookup failures for log messages
//!
//! Nothing in the monitoring pipeline is fatal: lookup errors become an error
//! verdict, delivery errors are logged, and only initialization errors stop the
//! process.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_lookup_error, categorize_reqwest_error};
pub use types::{ConfigError, FailureKind, InitializationError, LookupError, NotifyError};
