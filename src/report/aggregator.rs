//! Multi-domain report building.

use crate::config::{REPORT_HEADER, TELEGRAM_MAX_MESSAGE_CHARS};
use crate::status::{Domain, DomainStatus, StatusLine, StatusResolver};

/// One check cycle's result, ready to be rendered and delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<StatusLine>,
}

/// Verdict counts of a report, used for the post-cycle log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: usize,
    pub blocked: usize,
    pub not_blocked: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl Report {
    pub fn new(lines: Vec<StatusLine>) -> Self {
        Self { lines }
    }

    /// Status lines in configured order (header excluded).
    pub fn lines(&self) -> &[StatusLine] {
        &self.lines
    }

    /// Renders the header and every status line, one per row.
    ///
    /// No trailing newline; identical input always renders to identical bytes.
    /// The text is delivered as a single Telegram message, which is limited to
    /// `TELEGRAM_MAX_MESSAGE_CHARS` (4096) characters; a longer rendering is
    /// rejected by Telegram. See `fits_single_message`.
    pub fn render(&self) -> String {
        let mut out = String::from(REPORT_HEADER);
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.to_string());
        }
        out
    }

    /// Whether the rendered report is within Telegram's message length limit.
    pub fn fits_single_message(&self) -> bool {
        self.render().chars().count() <= TELEGRAM_MAX_MESSAGE_CHARS
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary {
            total: self.lines.len(),
            ..Default::default()
        };
        for line in &self.lines {
            match line.status() {
                DomainStatus::Blocked => summary.blocked += 1,
                DomainStatus::NotBlocked => summary.not_blocked += 1,
                DomainStatus::NotFound => summary.not_found += 1,
                DomainStatus::Error => summary.errors += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} checked, {} blocked, {} not blocked, {} not found, {} errors",
            self.total, self.blocked, self.not_blocked, self.not_found, self.errors
        )
    }
}

/// Checks every domain in order and assembles the report.
///
/// Domains are resolved one at a time; line order always matches `domains`.
/// Resolver failures show up inline as error lines, so this never fails.
///
/// # Arguments
///
/// * `resolver` - Source of per-domain verdicts
/// * `domains` - Domains to check, in report order
///
/// # Returns
///
/// A `Report` with exactly one line per domain.
pub async fn build_report(resolver: &dyn StatusResolver, domains: &[Domain]) -> Report {
    let mut lines = Vec::with_capacity(domains.len());
    for domain in domains {
        lines.push(resolver.check_line(domain).await);
    }
    Report::new(lines)
}

/// Like `build_report`, for raw entries that have not been parsed yet.
///
/// Entries are trimmed; blank ones are skipped without producing a line.
pub async fn build_report_from_raw<S: AsRef<str>>(
    resolver: &dyn StatusResolver,
    entries: &[S],
) -> Report {
    let domains: Vec<Domain> = entries
        .iter()
        .filter_map(|entry| Domain::parse(entry.as_ref()))
        .collect();
    build_report(resolver, &domains).await
}
