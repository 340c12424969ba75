//! Thin HTTP routing layer.
//!
//! Dispatches requests to the registry, the message source, and the
//! summarizer. Core errors are translated into fixed responses here and
//! logged with their detail; no business logic lives in the handlers.

use std::fmt::Display;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use tracing::error;

use crate::ai::{AssistantClient, Summarizer};
use crate::core::models::Channel;
use crate::discord::DiscordClient;
use crate::errors::RecapError;
use crate::normalize::normalize;
use crate::registry::ChannelRegistry;

pub struct AppState {
    pub registry: ChannelRegistry,
    pub discord: DiscordClient,
    pub summarizer: Summarizer<AssistantClient>,
}

#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/channels", get(list_channels).post(add_channel))
        .route("/messages", get(channel_messages))
        .route("/summary", get(channel_summary))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct AddChannelRequest {
    guild_id: String,
    channel_id: String,
    channel_name: String,
}

async fn add_channel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddChannelRequest>,
) -> Response {
    let channel = Channel {
        id: req.channel_id,
        guild_id: req.guild_id,
        name: req.channel_name.clone(),
        last_message_id: None,
        last_check: Utc::now(),
        active: true,
    };

    match state.registry.put(&channel) {
        Ok(()) => format!("Added channel: {}", req.channel_name).into_response(),
        Err(e) => internal_error(&e),
    }
}

async fn list_channels(State(state): State<Arc<AppState>>) -> Response {
    match state.registry.get_active() {
        Ok(channels) if channels.is_empty() => "No channels configured".into_response(),
        Ok(channels) => channels
            .iter()
            .map(|channel| {
                format!(
                    "{} ({}) - Last check: {}",
                    channel.name, channel.id, channel.last_check
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
            .into_response(),
        Err(e) => internal_error(&e),
    }
}

#[derive(Debug, Deserialize)]
struct ChannelQuery {
    channel_name: String,
    last_message_id: Option<String>,
}

async fn channel_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChannelQuery>,
) -> Response {
    let channel = match find_by_name(&state.registry, &query.channel_name) {
        Ok(Some(channel)) => channel,
        Ok(None) => return (StatusCode::NOT_FOUND, "Channel not found").into_response(),
        Err(e) => return internal_error(&e),
    };

    let after = query.last_message_id.as_deref().filter(|id| !id.is_empty());
    match state.discord.fetch_messages(&channel.id, after).await {
        Ok(raw) => Json(normalize(raw)).into_response(),
        Err(e) => internal_error(&e),
    }
}

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    channel_name: String,
}

async fn channel_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let mut channel = match find_by_name(&state.registry, &query.channel_name) {
        Ok(Some(channel)) => channel,
        Ok(None) => return (StatusCode::NOT_FOUND, "Channel not found").into_response(),
        Err(e) => return internal_error(&e),
    };

    let raw = match state
        .discord
        .fetch_messages(&channel.id, channel.last_message_id.as_deref())
        .await
    {
        Ok(raw) => raw,
        Err(e) => return internal_error(&e),
    };

    let batch = normalize(raw);
    let summary = match state.summarizer.summarize(&batch).await {
        Ok(summary) => summary,
        Err(e) => return internal_error(&e),
    };

    // Batch is chronological, so the newest surviving message is last.
    channel.last_check = Utc::now();
    if let Some(newest) = batch.last() {
        channel.last_message_id = Some(newest.id.clone());
    }
    if let Err(e) = state.registry.put(&channel) {
        return internal_error(&e);
    }

    summary.into_response()
}

fn find_by_name(registry: &ChannelRegistry, name: &str) -> Result<Option<Channel>, RecapError> {
    Ok(registry
        .get_active()?
        .into_iter()
        .find(|channel| channel.name == name))
}

fn internal_error(error: &dyn Display) -> Response {
    error!("Error: {}", error);
    (StatusCode::INTERNAL_SERVER_ERROR, "error").into_response()
}
