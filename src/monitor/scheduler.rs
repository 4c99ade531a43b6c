//! Fixed-interval report scheduling.
//!
//! The first report fires one full interval after start. Missed ticks are
//! skipped, not caught up, and nothing about past runs survives a restart.

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::cycle::{CycleOutcome, Monitor};

pub struct Scheduler {
    monitor: Arc<Monitor>,
    interval: Duration,
}

impl Scheduler {
    pub fn new(monitor: Arc<Monitor>) -> Self {
        let interval = monitor.config().check_interval;
        Self { monitor, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// One tick: a scheduled cycle, dropped if another cycle is running.
    pub async fn tick(&self) -> CycleOutcome {
        self.monitor.run_scheduled_cycle().await
    }

    /// Ticks until `cancel` fires. A cycle in progress is abandoned on cancellation.
    pub async fn run(self, cancel: CancellationToken) {
        let Some(first_tick) = Instant::now().checked_add(self.interval) else {
            error!(
                "Scheduler interval of {:?} is out of range; no reports will be scheduled",
                self.interval
            );
            return;
        };
        let mut ticker = interval_at(first_tick, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(
            "Scheduler started: reporting every {} minute(s)",
            self.interval.as_secs() / 60
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    tokio::select! {
                        _ = self.tick() => {}
                        _ = cancel.cancelled() => {
                            info!("Scheduler cancelled during a cycle");
                            break;
                        }
                    }
                }
                _ = cancel.cancelled() => {
                    break;
                }
            }
        }
        info!("Scheduler stopped");
    }

    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }
}
