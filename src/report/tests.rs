// Report module tests.

use super::*;

use std::time::Duration;

use crate::status::{Domain, DomainStatus, StatusLine};
use crate::test_helpers::ScriptedResolver;

fn domains(names: &[&str]) -> Vec<Domain> {
    names.iter().filter_map(|n| Domain::parse(n)).collect()
}

#[tokio::test]
async fn test_report_header_and_lines() {
    let resolver = ScriptedResolver::new()
        .with("a.com", DomainStatus::Blocked)
        .with("b.com", DomainStatus::NotBlocked)
        .with("c.com", DomainStatus::NotFound);

    let report = build_report(&resolver, &domains(&["a.com", "b.com", "c.com", "d.com"])).await;
    assert_eq!(
        report.render(),
        "📊 Domain Status Report:\n\
         a.com: 🔴 Blocked\n\
         b.com: 🟢 Not Blocked\n\
         c.com: ⚠️ Domain not found in API response.\n\
         d.com: ⚠️ Error fetching data."
    );
}

#[tokio::test]
async fn test_report_skips_blank_entries() {
    let resolver = ScriptedResolver::new()
        .with("a.com", DomainStatus::NotBlocked)
        .with("b.com", DomainStatus::NotBlocked);

    let report = build_report_from_raw(&resolver, &["a.com", "", "  ", "b.com"]).await;
    let names: Vec<&str> = report.lines().iter().map(|l| l.domain().as_str()).collect();
    assert_eq!(names, vec!["a.com", "b.com"]);
    assert_eq!(resolver.calls(), vec!["a.com", "b.com"]);
    assert_eq!(report.summary().errors, 0);
}

#[tokio::test(start_paused = true)]
async fn test_report_order_ignores_latency() {
    // Earlier domains are the slowest ones
    let resolver = ScriptedResolver::new()
        .with_delay("slow.com", DomainStatus::Blocked, Duration::from_secs(9))
        .with_delay("medium.com", DomainStatus::Error, Duration::from_secs(3))
        .with("fast.com", DomainStatus::NotBlocked);

    let report = build_report(&resolver, &domains(&["slow.com", "medium.com", "fast.com"])).await;
    let names: Vec<&str> = report.lines().iter().map(|l| l.domain().as_str()).collect();
    assert_eq!(names, vec!["slow.com", "medium.com", "fast.com"]);
    assert_eq!(resolver.max_in_flight(), 1);
}

#[tokio::test]
async fn test_report_order_for_every_verdict_permutation() {
    let verdicts = [
        DomainStatus::Blocked,
        DomainStatus::NotBlocked,
        DomainStatus::NotFound,
        DomainStatus::Error,
    ];
    for rotation in 0..verdicts.len() {
        let names = ["w.com", "x.com", "y.com", "z.com"];
        let mut resolver = ScriptedResolver::new();
        for (i, name) in names.iter().enumerate() {
            resolver = resolver.with(name, verdicts[(i + rotation) % verdicts.len()]);
        }

        let report = build_report(&resolver, &domains(&names)).await;
        for (i, line) in report.lines().iter().enumerate() {
            assert_eq!(line.domain().as_str(), names[i]);
            assert_eq!(line.status(), verdicts[(i + rotation) % verdicts.len()]);
        }
    }
}

#[tokio::test]
async fn test_report_render_is_deterministic() {
    let resolver = ScriptedResolver::new()
        .with("a.com", DomainStatus::Blocked)
        .with("b.com", DomainStatus::NotBlocked);
    let list = domains(&["a.com", "b.com"]);

    let first = build_report(&resolver, &list).await.render();
    let second = build_report(&resolver, &list).await.render();
    assert_eq!(first, second);
    assert!(!first.ends_with('\n'));
}

#[tokio::test]
async fn test_empty_report_is_header_only() {
    let resolver = ScriptedResolver::new();
    let report = build_report(&resolver, &[]).await;
    assert_eq!(report.render(), "📊 Domain Status Report:");
    assert_eq!(report.summary(), ReportSummary::default());
}

#[tokio::test]
async fn test_summary_counts() {
    let resolver = ScriptedResolver::new()
        .with("a.com", DomainStatus::Blocked)
        .with("b.com", DomainStatus::Blocked)
        .with("c.com", DomainStatus::NotFound);

    let report = build_report(&resolver, &domains(&["a.com", "b.com", "c.com", "d.com"])).await;
    let summary = report.summary();
    assert_eq!(summary.total, 4);
    assert_eq!(summary.blocked, 2);
    assert_eq!(summary.not_blocked, 0);
    assert_eq!(summary.not_found, 1);
    assert_eq!(summary.errors, 1);
    assert_eq!(
        summary.to_string(),
        "4 checked, 2 blocked, 0 not blocked, 1 not found, 1 errors"
    );
}

fn report_of(count: usize) -> Report {
    let lines = (0..count)
        .filter_map(|i| Domain::parse(&format!("mirror-{:04}.example.org", i)))
        .map(|domain| StatusLine::new(domain, DomainStatus::NotBlocked))
        .collect();
    Report::new(lines)
}

#[test]
fn test_report_fits_single_message_until_limit() {
    assert!(report_of(10).fits_single_message());

    let long = report_of(200);
    assert!(long.render().chars().count() > crate::config::TELEGRAM_MAX_MESSAGE_CHARS);
    assert!(!long.fits_single_message());
}
