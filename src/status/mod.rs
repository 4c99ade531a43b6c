//! Per-domain block status resolution.
//!
//! This module provides:
//! - The domain, verdict, and report-line types
//! - The `StatusResolver` contract and its HTTP implementation

mod resolver;
mod types;

pub use resolver::{verdict_from_payload, HttpStatusResolver, StatusResolver};
pub use types::{Domain, DomainStatus, StatusLine};
