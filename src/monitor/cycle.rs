//! One build-and-deliver cycle.

use std::sync::Arc;

use log::{error, info, warn};

use super::guard::{CycleOrigin, CycleSlot, CycleState, RunGuard};
use crate::config::{MonitorConfig, TELEGRAM_MAX_MESSAGE_CHARS};
use crate::notify::{ChatId, Notifier};
use crate::report::{build_report, ReportSummary};
use crate::status::StatusResolver;

/// Why a cycle did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No admin chat ID is configured
    MissingAdmin,
    /// The domain list is empty
    NoDomains,
    /// Neither is configured
    MissingAdminAndDomains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The report reached the admin
    Delivered(ReportSummary),
    /// The report was built but could not be delivered
    DeliveryFailed(ReportSummary),
    /// Configuration is incomplete; nothing was checked or sent
    Skipped(SkipReason),
    /// Another cycle was running; this scheduled tick was dropped
    Busy,
}

/// Shared entry point for scheduled and manual cycles.
///
/// Owns the resolver, the notifier, and the run guard; cycles never overlap.
pub struct Monitor {
    config: Arc<MonitorConfig>,
    resolver: Arc<dyn StatusResolver>,
    notifier: Arc<dyn Notifier>,
    guard: RunGuard,
}

impl Monitor {
    pub fn new(
        config: Arc<MonitorConfig>,
        resolver: Arc<dyn StatusResolver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            resolver,
            notifier,
            guard: RunGuard::new(),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn resolver(&self) -> &dyn StatusResolver {
        self.resolver.as_ref()
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn cycle_state(&self) -> CycleState {
        self.guard.state()
    }

    /// Whether `requester` is the configured admin. Always false when no admin is set.
    pub fn is_admin(&self, requester: &ChatId) -> bool {
        self.config.admin_chat_id.as_ref() == Some(requester)
    }

    /// Runs a cycle unless one is already running.
    pub async fn run_scheduled_cycle(&self) -> CycleOutcome {
        match self.guard.try_begin(CycleOrigin::Scheduled) {
            Some(slot) => self.execute(slot, CycleOrigin::Scheduled).await,
            None => {
                warn!("A report cycle is already running. Skipping this scheduled check.");
                CycleOutcome::Busy
            }
        }
    }

    /// Runs a cycle, waiting for a running one to finish first.
    pub async fn run_manual_cycle(&self) -> CycleOutcome {
        let slot = self.guard.begin(CycleOrigin::Manual).await;
        self.execute(slot, CycleOrigin::Manual).await
    }

    async fn execute(&self, _slot: CycleSlot<'_>, origin: CycleOrigin) -> CycleOutcome {
        info!("--- {} cycle triggered: running domain check ---", origin);

        let admin = self.config.admin_chat_id.as_ref();
        let no_domains = self.config.domains.is_empty();
        let admin = match (admin, no_domains) {
            (Some(admin), false) => admin,
            (None, true) => {
                warn!("ADMIN_CHAT_ID and DOMAINS_TO_CHECK are not set. Skipping report.");
                return CycleOutcome::Skipped(SkipReason::MissingAdminAndDomains);
            }
            (None, false) => {
                warn!("ADMIN_CHAT_ID is not set. Skipping report.");
                return CycleOutcome::Skipped(SkipReason::MissingAdmin);
            }
            (Some(_), true) => {
                warn!("DOMAINS_TO_CHECK is empty. Skipping report.");
                return CycleOutcome::Skipped(SkipReason::NoDomains);
            }
        };

        let report = build_report(self.resolver.as_ref(), &self.config.domains).await;
        let summary = report.summary();
        if !report.fits_single_message() {
            warn!(
                "Report for {} domains exceeds {} characters; Telegram will likely reject it",
                summary.total, TELEGRAM_MAX_MESSAGE_CHARS
            );
        }

        match self.notifier.send(admin, &report.render()).await {
            Ok(()) => {
                info!("Report sent successfully to chat {} ({})", admin, summary);
                CycleOutcome::Delivered(summary)
            }
            Err(e) => {
                error!("Failed to send {} report to chat {}: {}", origin, admin, e);
                CycleOutcome::DeliveryFailed(summary)
            }
        }
    }
}
