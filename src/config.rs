//! Startup configuration.
//!
//! The credential is read once from a local JSON file before the server
//! starts accepting connections (`.env.json` by default, the shape the
//! deployment scripts write): `{"telegram_token": "<token>"}`. The loaded
//! value is immutable for the lifetime of the process and is handed to the
//! poll dispatcher at construction time rather than stored in a global.

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Default location of the credential file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".env.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not open config file {path}: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode config file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Process configuration, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bot API token used to authenticate outbound calls.
    pub telegram_token: String,
}

impl Config {
    /// Read and decode the credential file at `path`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] if the file cannot be opened,
    /// [`ConfigError::Malformed`] if it does not decode into the expected
    /// shape. Both are fatal at the call site: the bot must not accept
    /// webhooks without a valid credential.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::NotFound {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }
}
