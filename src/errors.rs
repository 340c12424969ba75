use reqwest::StatusCode;
use thiserror::Error;

use crate::ai::RunState;

#[derive(Debug, Error)]
pub enum RecapError {
    #[error("Discord API error: {status} - {body}")]
    DiscordApi { status: StatusCode, body: String },

    #[error("Assistant API request failed: {status} {body}")]
    AssistantApi { status: StatusCode, body: String },

    #[error("Run failed with state: {0}")]
    RunFailed(RunState),

    #[error("Run did not complete within {0}s")]
    RunTimedOut(u64),

    #[error("Failed to send HTTP request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse summary payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to access channel registry: {0}")]
    Registry(#[from] rusqlite::Error),
}
