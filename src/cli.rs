use clap::Parser;

use crate::config;

#[derive(Parser)]
#[command(name = "kickvote")]
#[command(author, version, about = "Telegram webhook bot that turns /kick commands into group kick polls", long_about = None)]
pub struct Cli {
    /// Path to the JSON credential file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Port for the webhook server
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
