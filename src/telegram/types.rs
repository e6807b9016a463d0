//! Wire types for the slice of the Telegram Bot API this bot touches.
//!
//! Inbound: the webhook `Update` envelope, decoded down to the fields the
//! kick rule looks at (serde ignores the rest of the payload). Outbound: the
//! `sendPoll` request body.

use serde::{Deserialize, Serialize};

/// One webhook delivery. Non-message updates (edits, callback queries, ...)
/// decode with `message: None` and are ignored upstream.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
    /// Absent for stickers, photos and other non-text messages.
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// `"group"`, `"supergroup"`, `"private"`, `"channel"`. Polls are only
    /// created for `"group"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Sender of the message. Decoded for completeness; the kick rule does not
/// act on it.
#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

/// Body of a `sendPoll` call.
#[derive(Debug, Serialize)]
pub struct PollRequest {
    pub chat_id: i64,
    pub question: String,
    pub options: [&'static str; 2],
    pub is_anonymous: bool,
}

impl PollRequest {
    /// Non-anonymous yes/no poll asking whether `target_user` should be
    /// kicked from the chat. The target handle is interpolated verbatim.
    pub fn kick_vote(chat_id: i64, target_user: &str) -> Self {
        Self {
            chat_id,
            question: format!("Should we kick {} from the group?", target_user),
            options: ["Yes", "No"],
            is_anonymous: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn kick_vote_payload_shape() {
        let payload = PollRequest::kick_vote(42, "@dave");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "chat_id": 42,
                "question": "Should we kick @dave from the group?",
                "options": ["Yes", "No"],
                "is_anonymous": false
            })
        );
    }

    #[test]
    fn update_decodes_real_group_message() {
        let raw = json!({
            "update_id": 10000,
            "message": {
                "message_id": 1365,
                "date": 1441645532,
                "chat": {"id": -100123, "type": "group", "title": "test group"},
                "from": {"id": 1111, "is_bot": false, "first_name": "Test", "username": "test_user"},
                "text": "/kick @spammer"
            }
        });

        let update: Update = serde_json::from_value(raw).unwrap();
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, -100123);
        assert_eq!(message.chat.kind, "group");
        assert_eq!(message.from.unwrap().username.as_deref(), Some("test_user"));
        assert_eq!(message.text.as_deref(), Some("/kick @spammer"));
    }

    #[test]
    fn update_without_message_decodes() {
        let update: Update = serde_json::from_str(r#"{"update_id": 1}"#).unwrap();
        assert!(update.message.is_none());
    }
}
