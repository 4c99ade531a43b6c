//! Command dispatch.

use std::sync::Arc;

use log::{debug, error};

use super::parse::Command;
use crate::config::{REPLY_CHECK_USAGE, REPLY_HELP, REPLY_START, REPLY_UNKNOWN_COMMAND};
use crate::monitor::{ManualTriggerGate, Monitor, TriggerOutcome};
use crate::notify::ChatId;
use crate::status::{Domain, StatusLine};

/// Executes commands on behalf of a chat and sends the replies.
pub struct CommandDispatcher {
    monitor: Arc<Monitor>,
    gate: ManualTriggerGate,
}

impl CommandDispatcher {
    pub fn new(monitor: Arc<Monitor>) -> Self {
        let gate = ManualTriggerGate::new(monitor.clone());
        Self { monitor, gate }
    }

    /// Parses `text` and handles it if it is a command; plain text is ignored.
    pub async fn handle_text(&self, requester: &ChatId, text: &str) {
        match Command::parse(text) {
            Some(command) => self.handle(requester, command).await,
            None => debug!("Ignoring non-command message from chat {}", requester),
        }
    }

    pub async fn handle(&self, requester: &ChatId, command: Command) {
        debug!("Chat {} sent {:?}", requester, command);
        match command {
            Command::Start => self.reply(requester, REPLY_START).await,
            Command::Check(Some(raw)) => match Domain::parse(&raw) {
                Some(domain) => {
                    let line = self.check_one(&domain).await;
                    self.reply(requester, &line.to_string()).await;
                }
                None => self.reply(requester, REPLY_CHECK_USAGE).await,
            },
            Command::Check(None) => self.reply(requester, REPLY_CHECK_USAGE).await,
            Command::Report => {
                self.report_now(requester).await;
            }
            Command::GetId => self.reply(requester, &who_am_i(requester)).await,
            Command::Help => self.reply(requester, REPLY_HELP).await,
            Command::Unknown(_) => self.reply(requester, REPLY_UNKNOWN_COMMAND).await,
        }
    }

    /// Resolves a single domain now, outside any cycle.
    pub async fn check_one(&self, domain: &Domain) -> StatusLine {
        self.monitor.resolver().check_line(domain).await
    }

    /// Forces a report through the manual trigger gate.
    pub async fn report_now(&self, requester: &ChatId) -> TriggerOutcome {
        self.gate.trigger(requester).await
    }

    async fn reply(&self, to: &ChatId, text: &str) {
        if let Err(e) = self.monitor.notifier().send(to, text).await {
            error!("Failed to reply to chat {}: {}", to, e);
        }
    }
}

/// Reply text for `/getid`.
pub fn who_am_i(requester: &ChatId) -> String {
    format!("Your chat ID is: {}", requester)
}
