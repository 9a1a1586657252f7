//! Test helpers shared by the integration tests.
#![allow(dead_code)]

use serde_json::{Value, json};
use tgbot_api::BotClient;
use wiremock::MockServer;

pub const TOKEN: &str = "123456:test-secret-token";

/// Path of `method` on the mock server.
pub fn method_path(method: &str) -> String {
    format!("/bot{TOKEN}/{method}")
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> BotClient {
    BotClient::builder()
        .token(TOKEN)
        .base_url(server.uri())
        .build()
        .expect("valid test client")
}

/// Successful envelope around `result`.
pub fn ok(result: Value) -> Value {
    json!({ "ok": true, "result": result })
}

pub fn message_json(message_id: i64, chat_id: i64, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_700_000_000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Ann" },
        "text": text
    })
}
