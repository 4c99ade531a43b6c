//! Manual report triggering, restricted to the admin.

use std::sync::Arc;

use log::{error, info, warn};

use super::cycle::{CycleOutcome, Monitor, SkipReason};
use crate::config::{REPLY_ACK_REPORT, REPLY_DENIED, REPLY_NO_DOMAINS};
use crate::notify::ChatId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The requester is not the admin; only a denial was sent
    Denied,
    /// The cycle ran (it may still have been skipped or failed to deliver)
    Completed(CycleOutcome),
}

pub struct ManualTriggerGate {
    monitor: Arc<Monitor>,
}

impl ManualTriggerGate {
    pub fn new(monitor: Arc<Monitor>) -> Self {
        Self { monitor }
    }

    /// Runs a report cycle on behalf of `requester`.
    ///
    /// Non-admins get a denial and nothing else. The admin gets an acknowledgment
    /// first, then the report itself once the cycle finishes.
    pub async fn trigger(&self, requester: &ChatId) -> TriggerOutcome {
        if !self.monitor.is_admin(requester) {
            warn!("Denied report request from chat {}", requester);
            self.reply(requester, REPLY_DENIED).await;
            return TriggerOutcome::Denied;
        }

        info!("Manual report requested by chat {}", requester);
        self.reply(requester, REPLY_ACK_REPORT).await;

        let outcome = self.monitor.run_manual_cycle().await;
        if outcome == CycleOutcome::Skipped(SkipReason::NoDomains) {
            self.reply(requester, REPLY_NO_DOMAINS).await;
        }
        TriggerOutcome::Completed(outcome)
    }

    async fn reply(&self, to: &ChatId, text: &str) {
        if let Err(e) = self.monitor.notifier().send(to, text).await {
            error!("Failed to reply to chat {}: {}", to, e);
        }
    }
}
