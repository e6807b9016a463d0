//! kickvote — Telegram webhook bot that turns `/kick @user` commands in
//! group chats into non-anonymous yes/no kick polls.
//!
//! Flow: the credential is loaded from `.env.json` at startup, the webhook
//! server decodes each delivered update, and a matching `/kick @handle`
//! message in a group chat triggers a single `sendPoll` call. The bot ends
//! at "poll request sent or error logged" — it does not tally votes or
//! remove anyone.

pub mod cli;
pub mod config;
pub mod telegram;
pub mod webhook;

pub use config::{Config, ConfigError};
pub use telegram::{DispatchError, PollDispatcher};
