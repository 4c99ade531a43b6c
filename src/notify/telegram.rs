//! Telegram Bot API client.
//!
//! Only the two methods the service needs: `sendMessage` for delivery and
//! `getUpdates` for receiving commands. Request errors are stripped of their URL
//! before they are returned because the URL contains the bot token.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::types::ChatId;
use super::Notifier;
use crate::config::{BotToken, TELEGRAM_SEND_TIMEOUT_SECS};
use crate::error_handling::NotifyError;

/// Envelope of every Bot API response.
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    description: Option<String>,
    result: Option<T>,
}

/// An incoming update. Only message updates are of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Client for one bot.
#[derive(Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    api_base: String,
    token: BotToken,
}

impl TelegramClient {
    pub fn new(client: reqwest::Client, api_base: impl Into<String>, token: BotToken) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            token,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_base.trim_end_matches('/'),
            self.token.as_str(),
            method
        )
    }

    /// Calls `sendMessage`.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` on transport failure, a non-2xx status, or an
    /// `ok: false` answer.
    pub async fn send_message(&self, chat_id: &ChatId, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .timeout(Duration::from_secs(TELEGRAM_SEND_TIMEOUT_SECS))
            .json(&json!({ "chat_id": chat_id.as_str(), "text": text }))
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;

        read_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    /// Calls `getUpdates`, long-polling for up to `timeout_secs`.
    ///
    /// `offset` is one past the last processed `update_id`; it acknowledges
    /// everything before it.
    ///
    /// # Errors
    ///
    /// Same conditions as `send_message`.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, NotifyError> {
        let mut query = vec![
            ("timeout", timeout_secs.to_string()),
            ("allowed_updates", "[\"message\"]".to_string()),
        ];
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }

        let response = self
            .client
            .get(self.method_url("getUpdates"))
            .query(&query)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;

        Ok(read_response::<Vec<Update>>(response)
            .await?
            .unwrap_or_default())
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_base", &self.api_base)
            .field("token", &self.token)
            .finish()
    }
}

async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, NotifyError> {
    let status = response.status();
    if !status.is_success() {
        let description = response
            .json::<ApiResponse<serde_json::Value>>()
            .await
            .ok()
            .and_then(|body| body.description)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
        return Err(NotifyError::ApiStatus {
            status: status.as_u16(),
            description,
        });
    }

    let body: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| NotifyError::Transport(e.without_url()))?;
    if !body.ok {
        return Err(NotifyError::Rejected(
            body.description.unwrap_or_else(|| "no description".to_string()),
        ));
    }
    Ok(body.result)
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send(&self, recipient: &ChatId, text: &str) -> Result<(), NotifyError> {
        self.send_message(recipient, text).await
    }
}
