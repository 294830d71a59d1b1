//! Telegram Bot API transport.
//!
//! Inbound: `getUpdates` long polling, reduced to plain text events
//! (non-text updates are skipped). Outbound: `sendMessage` /
//! `sendPhoto` with reply-keyboard markup.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::CollaboratorError;
use crate::fsm::IncomingEvent;
use crate::integrations::traits::{ChatTransport, Keyboard, OutgoingMessage};

const SERVICE: &str = "telegram";

/// One polled update; `event` is `None` for updates the core does not
/// handle (stickers, photos, joins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub update_id: i64,
    pub event: Option<IncomingEvent>,
}

pub struct TelegramTransport {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramTransport {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Long-poll for updates after `offset`. Blocks up to
    /// `timeout_secs` on the server side; other sessions are not
    /// affected, polling runs in its own task.
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, CollaboratorError> {
        let response = self
            .client
            .get(self.method_url("getUpdates"))
            .query(&[("offset", offset.to_string()), ("timeout", timeout_secs.to_string())])
            .send()
            .await?;
        let envelope: ApiEnvelope<Vec<RawUpdate>> = check_status(response).await?.json().await?;
        let updates = envelope_result(envelope)?;
        Ok(updates
            .into_iter()
            .map(|raw| {
                let event = raw.message.and_then(|message| {
                    let chat_id = message.chat.id;
                    message.text.map(|text| IncomingEvent { chat_id, text })
                });
                Update {
                    update_id: raw.update_id,
                    event,
                }
            })
            .collect())
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<(), CollaboratorError> {
        let reply_markup = message.keyboard.as_ref().map(|keyboard| match keyboard {
            Keyboard::Reply(rows) => {
                let rows: Vec<Vec<serde_json::Value>> = rows
                    .iter()
                    .map(|row| row.iter().map(|label| json!({ "text": label })).collect())
                    .collect();
                json!({ "keyboard": rows, "resize_keyboard": true })
            }
            Keyboard::Remove => json!({ "remove_keyboard": true }),
        });

        let mut body = match &message.photo_url {
            Some(photo) => json!({
                "chat_id": chat_id,
                "photo": photo,
                "caption": message.text,
            }),
            None => json!({
                "chat_id": chat_id,
                "text": message.text,
            }),
        };
        if message.html {
            body["parse_mode"] = json!("HTML");
        }
        if let Some(markup) = reply_markup {
            body["reply_markup"] = markup;
        }

        let method = if message.photo_url.is_some() {
            "sendPhoto"
        } else {
            "sendMessage"
        };
        let response = self
            .client
            .post(self.method_url(method))
            .json(&body)
            .send()
            .await?;
        let envelope: ApiEnvelope<serde_json::Value> =
            check_status(response).await?.json().await?;
        envelope_result(envelope)?;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ApiEnvelope<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct RawUpdate {
    update_id: i64,
    message: Option<RawMessage>,
}

#[derive(Deserialize)]
struct RawMessage {
    chat: RawChat,
    text: Option<String>,
}

#[derive(Deserialize)]
struct RawChat {
    id: i64,
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CollaboratorError> {
    let status = response.status();
    if !status.is_success() {
        return Err(CollaboratorError::Status {
            service: SERVICE,
            status: status.as_u16(),
        });
    }
    Ok(response)
}

fn envelope_result<T>(envelope: ApiEnvelope<T>) -> Result<T, CollaboratorError> {
    if !envelope.ok {
        return Err(CollaboratorError::Malformed {
            service: SERVICE,
            message: envelope
                .description
                .unwrap_or_else(|| "ok=false without description".to_string()),
        });
    }
    envelope.result.ok_or_else(|| CollaboratorError::Malformed {
        service: SERVICE,
        message: "ok=true without result".to_string(),
    })
}
