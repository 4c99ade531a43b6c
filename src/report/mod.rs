//! Report aggregation.
//!
//! Turns an ordered list of domains into one report: a fixed header followed by
//! one status line per domain, in the configured order.

mod aggregator;

pub use aggregator::{build_report, build_report_from_raw, Report, ReportSummary};
