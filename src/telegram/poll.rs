//! Outbound poll creation against the Bot API.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use crate::telegram::types::PollRequest;

/// Default Bot API root.
pub const TELEGRAM_API_ROOT: &str = "https://api.telegram.org";

/// Bounded timeout for the outbound call so a hung Bot API response cannot
/// hold a webhook request open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to marshal poll payload: {0}")]
    Marshal(#[from] serde_json::Error),
    #[error("poll request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("non-success response from Telegram API: {0}")]
    BadStatus(StatusCode),
}

/// Sends kick polls to the Bot API.
///
/// One instance per process, built at startup from the loaded [`Config`].
/// Holds the token and a shared HTTP client; no other state, so it is safe
/// to share across concurrent webhook requests.
#[derive(Debug, Clone)]
pub struct PollDispatcher {
    http: reqwest::Client,
    api_root: String,
    token: String,
}

impl PollDispatcher {
    /// Build a dispatcher from the startup configuration.
    ///
    /// # Errors
    /// Returns a `reqwest::Error` if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_root: TELEGRAM_API_ROOT.to_string(),
            token: config.telegram_token.clone(),
        })
    }

    /// Point the dispatcher at a different API root. Used by tests to target
    /// a mock server.
    #[must_use]
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Create a yes/no kick poll in `chat_id` for `target_user`.
    ///
    /// Single attempt, no retry; the webhook handler decides what to do with
    /// a failure.
    pub async fn send_kick_poll(&self, chat_id: i64, target_user: &str) -> Result<(), DispatchError> {
        let payload = PollRequest::kick_vote(chat_id, target_user);
        let body = serde_json::to_vec(&payload)?;

        let url = format!("{}/bot{}/sendPoll", self.api_root, self.token);
        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::BadStatus(status));
        }

        log::info!("Kick poll sent to chat {}", chat_id);
        Ok(())
    }
}
