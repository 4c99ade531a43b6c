// Shared test helpers for mock API setup and CLI construction.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blockwatch::{Cli, LogFormat, LogLevel};

#[allow(dead_code)]
pub const TOKEN: &str = "42:integration-token";

/// Builds CLI options pointing at the given mock servers.
#[allow(dead_code)]
pub fn test_cli(status_api: &MockServer, telegram_api: &MockServer) -> Cli {
    Cli {
        bot_token: Some(TOKEN.to_string()),
        admin_chat_id: Some("1001".to_string()),
        domains: Some("ok.example, down.example, bad.example,".to_string()),
        interval_minutes: 30,
        status_api_url: format!("{}/", status_api.uri()),
        telegram_api_url: telegram_api.uri(),
        request_timeout_secs: 1,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        once: true,
    }
}

/// Mounts a status API answer for one domain.
#[allow(dead_code)]
pub async fn mount_status(server: &MockServer, domain: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("domain", domain))
        .and(query_param("json", "true"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// A status API answer flagging `domain` as blocked or not.
#[allow(dead_code)]
pub fn blocked_body(domain: &str, blocked: bool) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ domain: { "blocked": blocked } }))
}

/// Mounts a Telegram `sendMessage` endpoint answering with `status`.
#[allow(dead_code)]
pub async fn mount_send_message(server: &MockServer, status: u16) {
    let body = if (200..300).contains(&status) {
        json!({"ok": true, "result": {"message_id": 1}})
    } else {
        json!({"ok": false, "error_code": status, "description": "Bad Request: chat not found"})
    };
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", TOKEN)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Texts posted to `sendMessage`, in order.
#[allow(dead_code)]
pub async fn sent_texts(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path().ends_with("/sendMessage"))
        .filter_map(|r| serde_json::from_slice::<serde_json::Value>(&r.body).ok())
        .map(|body| {
            (
                body["chat_id"].as_str().unwrap_or_default().to_string(),
                body["text"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}
