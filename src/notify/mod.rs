//! Message delivery.
//!
//! The monitor only depends on the `Notifier` contract: deliver a text to a chat
//! and report success or failure. `TelegramClient` implements it on top of the
//! Telegram Bot API and also exposes update polling for the command loop.

mod telegram;
mod types;

use async_trait::async_trait;

use crate::error_handling::NotifyError;

pub use telegram::{Chat, Message, TelegramClient, Update};
pub use types::ChatId;

/// Delivers a finished text to a chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to `recipient`. A single attempt; the caller decides what a
    /// failure means.
    async fn send(&self, recipient: &ChatId, text: &str) -> Result<(), NotifyError>;
}
