// Notify module tests.

use super::*;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::BotToken;

const TOKEN: &str = "123456:test-token";

fn client_for(base: &str) -> TelegramClient {
    TelegramClient::new(
        reqwest::Client::new(),
        base,
        BotToken::new(TOKEN).unwrap(),
    )
}

#[test]
fn test_chat_id_parse() {
    assert_eq!(ChatId::parse(" -100123 ").unwrap().as_str(), "-100123");
    assert!(ChatId::parse("").is_none());
    assert!(ChatId::parse("  ").is_none());
}

#[test]
fn test_chat_id_from_integer_matches_parsed() {
    assert_eq!(ChatId::from(-42), ChatId::parse("-42").unwrap());
    assert_ne!(ChatId::from(42), ChatId::parse("-42").unwrap());
}

#[test]
fn test_debug_does_not_print_token() {
    let client = client_for("https://api.telegram.org");
    assert!(!format!("{:?}", client).contains("test-token"));
}

#[tokio::test]
async fn test_send_message_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{}/sendMessage", TOKEN)))
        .and(body_partial_json(json!({"chat_id": "42", "text": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {"message_id": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let result = client.send(&ChatId::from(42), "hello").await;
    assert!(result.is_ok(), "unexpected error: {:?}", result);
}

#[tokio::test]
async fn test_send_message_http_error_carries_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    match client.send(&ChatId::from(1), "x").await {
        Err(NotifyError::ApiStatus {
            status,
            description,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(description, "Bad Request: chat not found");
        }
        other => panic!("expected ApiStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_send_message_ok_false_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    assert!(matches!(
        client.send(&ChatId::from(1), "x").await,
        Err(NotifyError::Rejected(_))
    ));
}

#[tokio::test]
async fn test_transport_error_does_not_leak_token() {
    let client = client_for("http://127.0.0.1:1");
    let err = client
        .send(&ChatId::from(1), "x")
        .await
        .expect_err("nothing listens on port 1");
    assert!(matches!(err, NotifyError::Transport(_)));
    assert!(!err.to_string().contains("test-token"));
}

#[tokio::test]
async fn test_get_updates_parses_messages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/bot{}/getUpdates", TOKEN)))
        .and(query_param("offset", "7"))
        .and(query_param("timeout", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": [
                {"update_id": 7, "message": {"message_id": 1, "chat": {"id": 42, "type": "private"}, "text": "/getid"}},
                {"update_id": 8, "edited_message": {"message_id": 2}},
                {"update_id": 9, "message": {"message_id": 3, "chat": {"id": -5, "type": "group"}}}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let updates = client.get_updates(Some(7), 0).await.unwrap();
    assert_eq!(updates.len(), 3);
    assert_eq!(updates[0].update_id, 7);
    let first = updates[0].message.as_ref().unwrap();
    assert_eq!(first.chat.id, 42);
    assert_eq!(first.text.as_deref(), Some("/getid"));
    assert!(updates[1].message.is_none());
    assert!(updates[2].message.as_ref().unwrap().text.is_none());
}
