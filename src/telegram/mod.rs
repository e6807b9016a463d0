//! Telegram wire types, the `/kick` command rule, and the outbound poll call.

pub mod command;
pub mod poll;
pub mod types;

pub use poll::{DispatchError, PollDispatcher};
