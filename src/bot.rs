//! Telegram update polling.
//!
//! Long-polls `getUpdates`, acknowledges each update by advancing the offset, and
//! hands text messages to the command dispatcher one at a time.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::commands::CommandDispatcher;
use crate::config::{POLL_ERROR_PAUSE, TELEGRAM_POLL_TIMEOUT_SECS};
use crate::notify::{ChatId, TelegramClient, Update};

pub struct Poller {
    client: TelegramClient,
    dispatcher: Arc<CommandDispatcher>,
    poll_timeout_secs: u64,
}

impl Poller {
    pub fn new(client: TelegramClient, dispatcher: Arc<CommandDispatcher>) -> Self {
        Self {
            client,
            dispatcher,
            poll_timeout_secs: TELEGRAM_POLL_TIMEOUT_SECS,
        }
    }

    /// Overrides the long-poll timeout passed to `getUpdates`.
    pub fn with_poll_timeout(mut self, secs: u64) -> Self {
        self.poll_timeout_secs = secs;
        self
    }

    /// Polls until `cancel` fires.
    pub async fn run(self, cancel: CancellationToken) {
        info!("Bot is polling for commands");
        let mut offset: Option<i64> = None;

        loop {
            let polled = tokio::select! {
                polled = self.client.get_updates(offset, self.poll_timeout_secs) => polled,
                _ = cancel.cancelled() => break,
            };

            match polled {
                Ok(updates) => {
                    for update in updates {
                        offset = Some(update.update_id + 1);
                        tokio::select! {
                            _ = self.dispatch(update) => {}
                            _ = cancel.cancelled() => {
                                info!("Bot stopped while handling a command");
                                return;
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!("Polling for updates failed: {}", e);
                    tokio::select! {
                        _ = tokio::time::sleep(POLL_ERROR_PAUSE) => {}
                        _ = cancel.cancelled() => break,
                    }
                }
            }
        }
        info!("Bot stopped polling");
    }

    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(cancel))
    }

    async fn dispatch(&self, update: Update) {
        let Some(message) = update.message else {
            debug!("Skipping update {} without a message", update.update_id);
            return;
        };
        let Some(text) = message.text else {
            return;
        };
        let requester = ChatId::from(message.chat.id);
        self.dispatcher.handle_text(&requester, &text).await;
    }
}
