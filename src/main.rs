use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use recap::ai::{AssistantClient, Summarizer};
use recap::core::config::AppConfig;
use recap::discord::DiscordClient;
use recap::registry::ChannelRegistry;
use recap::server::{self, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recap::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let registry = ChannelRegistry::open(Path::new(&config.registry_path))?;
    let discord = DiscordClient::new(
        config.discord_api_url.clone(),
        config.discord_bot_token.clone(),
    );

    let backend = AssistantClient::new(
        config.openai_api_url.clone(),
        config.openai_api_key.clone(),
        config.openai_assistant_id.clone(),
    );
    let mut summarizer = Summarizer::new(backend);
    if let Some(secs) = config.poll_timeout_secs {
        summarizer = summarizer.with_poll_timeout(Duration::from_secs(secs));
    }

    let state = Arc::new(AppState {
        registry,
        discord,
        summarizer,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "recap listening");
    axum::serve(listener, server::router(state)).await?;

    Ok(())
}
