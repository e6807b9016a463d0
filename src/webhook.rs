//! Inbound webhook endpoint.
//!
//! One route, `POST /webhook`, invoked by Telegram once per update. The
//! response is a bare status code with an empty body: `200` for handled or
//! ignored updates, `400` for bodies that do not decode, `500` when the
//! outbound poll call fails. Each request is independent; the only shared
//! state is the read-only dispatcher.

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use std::sync::Arc;

use crate::telegram::PollDispatcher;
use crate::telegram::command::{KickCommand, parse_kick};
use crate::telegram::types::Update;

/// Shared state for the webhook server.
#[derive(Clone)]
struct WebhookState {
    dispatcher: Arc<PollDispatcher>,
}

/// Build the webhook router.
pub fn router(dispatcher: Arc<PollDispatcher>) -> Router {
    Router::new()
        .route("/webhook", post(webhook_handler))
        .with_state(WebhookState { dispatcher })
}

/// POST /webhook — decode the update, apply the kick rule, dispatch at most
/// one poll.
async fn webhook_handler(State(state): State<WebhookState>, body: Bytes) -> StatusCode {
    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(err) => {
            log::error!("Error parsing update: {}", err);
            return StatusCode::BAD_REQUEST;
        }
    };

    // Non-message updates and non-group chats are expected traffic, not
    // errors.
    let Some(message) = update.message else {
        return StatusCode::OK;
    };
    if message.chat.kind != "group" {
        return StatusCode::OK;
    }
    let Some(text) = message.text.as_deref() else {
        return StatusCode::OK;
    };

    match parse_kick(text) {
        KickCommand::Kick(target) => {
            match state.dispatcher.send_kick_poll(message.chat.id, target).await {
                Ok(()) => StatusCode::OK,
                Err(err) => {
                    log::error!("Failed to send poll: {}", err);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
        KickCommand::InvalidTarget(target) => {
            log::warn!("Invalid kick target {:?}: should start with '@'", target);
            StatusCode::OK
        }
        KickCommand::NoMatch => StatusCode::OK,
    }
}
