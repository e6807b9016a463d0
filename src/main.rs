use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use kickvote::cli::Cli;
use kickvote::config::Config;
use kickvote::telegram::PollDispatcher;
use kickvote::webhook;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse_args();

    // No serving without a credential.
    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load bot token from {}", cli.config))?;

    let dispatcher =
        Arc::new(PollDispatcher::new(&config).context("failed to build HTTP client")?);
    let app = webhook::router(dispatcher);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    log::info!("Starting webhook server on http://{}", addr);
    log::info!("  /webhook  - Telegram updates (POST)");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("webhook server exited")?;

    Ok(())
}
