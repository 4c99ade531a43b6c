//! blockwatch library: domain block monitoring with Telegram reports
//!
//! This library checks a configured list of domains against a block status API,
//! assembles the verdicts into one report, and delivers it to an admin chat,
//! either on a fixed schedule or when the admin asks for it.
//!
//! # Example
//!
//! ```no_run
//! use blockwatch::config::{parse_domain_list, MonitorConfig};
//! use blockwatch::status::HttpStatusResolver;
//! use blockwatch::report::build_report;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MonitorConfig {
//!     domains: parse_domain_list("example.com, example.org"),
//!     ..Default::default()
//! };
//! let resolver = HttpStatusResolver::from_config(&config)?;
//! let report = build_report(&resolver, &config.domains).await;
//! println!("{}", report.render());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

mod app;
pub mod bot;
pub mod commands;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod monitor;
pub mod notify;
pub mod report;
pub mod status;
#[cfg(test)]
mod test_helpers;

// Re-export public API
pub use config::{Cli, LogFormat, LogLevel, MonitorConfig};
pub use monitor::{CycleOutcome, ManualTriggerGate, Monitor, Scheduler, TriggerOutcome};
pub use run::run_service;

// Service wiring (builds every component from the CLI options and runs them)
mod run {
    use std::sync::Arc;

    use anyhow::{bail, Context, Result};
    use log::{error, info};
    use tokio_util::sync::CancellationToken;

    use crate::app::{shutdown_gracefully, wait_for_shutdown, BackgroundTask, ShutdownCause};
    use crate::bot::Poller;
    use crate::commands::CommandDispatcher;
    use crate::config::Cli;
    use crate::initialization::init_telegram_client;
    use crate::monitor::{CycleOutcome, Monitor, Scheduler};
    use crate::notify::TelegramClient;
    use crate::status::HttpStatusResolver;

    /// Runs the service described by `cli`.
    ///
    /// Without `--once`: starts the scheduler and the command poller and runs
    /// until Ctrl-C/SIGTERM. With `--once`: runs a single report cycle and returns.
    ///
    /// # Arguments
    ///
    /// * `cli` - Parsed command-line/environment options
    ///
    /// # Returns
    ///
    /// `Ok(())` after a clean shutdown, or after the one-shot report was delivered.
    ///
    /// # Errors
    ///
    /// Fails fast if the bot token is missing or the configuration is invalid.
    /// In `--once` mode it also fails when the admin ID or domain list is missing
    /// or the report could not be delivered. In service mode it fails when the
    /// scheduler or the command poller stops before shutdown was requested.
    pub async fn run_service(cli: Cli) -> Result<()> {
        let token = cli.bot_token()?;
        let config = Arc::new(cli.monitor_config().context("Invalid configuration")?);

        let resolver = HttpStatusResolver::from_config(&config)
            .context("Failed to initialize status API client")?;
        let http = init_telegram_client(&config.user_agent)
            .context("Failed to initialize Telegram client")?;
        let telegram = TelegramClient::new(http, cli.telegram_api_url.clone(), token);

        let monitor = Arc::new(Monitor::new(
            Arc::clone(&config),
            Arc::new(resolver),
            Arc::new(telegram.clone()),
        ));

        if cli.once {
            if config.admin_chat_id.is_none() || config.domains.is_empty() {
                bail!("ADMIN_CHAT_ID and DOMAINS_TO_CHECK must both be set for a one-shot report");
            }
            info!("--- One-shot run: building domain report ---");
            return match monitor.run_manual_cycle().await {
                CycleOutcome::Delivered(_) => Ok(()),
                CycleOutcome::DeliveryFailed(_) => bail!("The report could not be delivered"),
                other => bail!("No report was produced: {:?}", other),
            };
        }

        let cancel = CancellationToken::new();
        let scheduler = Scheduler::new(Arc::clone(&monitor)).spawn(cancel.child_token());
        let dispatcher = Arc::new(CommandDispatcher::new(Arc::clone(&monitor)));
        let poller = Poller::new(telegram, dispatcher).spawn(cancel.child_token());
        info!("Bot and scheduler have started successfully.");

        let mut tasks = vec![
            BackgroundTask::new("scheduler", scheduler),
            BackgroundTask::new("command poller", poller),
        ];
        match wait_for_shutdown(&mut tasks).await {
            ShutdownCause::Signal => {
                info!("Shutdown requested, stopping...");
                shutdown_gracefully(cancel, tasks).await;
                Ok(())
            }
            ShutdownCause::TaskExited { name, result } => {
                let reason = match result {
                    Ok(()) => "stopped unexpectedly".to_string(),
                    Err(e) => format!("failed: {}", e),
                };
                error!("The {} {}. Shutting down.", name, reason);
                shutdown_gracefully(cancel, tasks).await;
                bail!("The {} {}", name, reason)
            }
        }
    }
}
