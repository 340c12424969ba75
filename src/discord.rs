//! Discord message source client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::core::models::RawMessage;
use crate::errors::RecapError;

/// Descriptive client identifier Discord requires on every bot request.
const USER_AGENT: &str = "DiscordBot (https://github.com/recap-bot/recap, 0.1.0)";

/// Messages per history page, Discord's documented maximum.
const PAGE_LIMIT: u32 = 100;

/// Bot-authenticated client for the Discord REST API.
pub struct DiscordClient {
    http: Client,
    api_url: String,
    bot_token: String,
}

impl DiscordClient {
    #[must_use]
    pub fn new(api_url: String, bot_token: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_url,
            bot_token,
        }
    }

    /// Fetch one newest-first page of channel history, optionally only
    /// messages after a known id. The page is passed through untouched;
    /// normalization happens downstream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Discord responds non-2xx;
    /// the error carries the status and response body.
    pub async fn fetch_messages(
        &self,
        channel_id: &str,
        after: Option<&str>,
    ) -> Result<Vec<RawMessage>, RecapError> {
        let url = format!("{}/channels/{}/messages", self.api_url, channel_id);

        let mut query: Vec<(&str, String)> = vec![("limit", PAGE_LIMIT.to_string())];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }

        let response = self
            .http
            .get(url)
            .query(&query)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Bot {}", self.bot_token),
            )
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecapError::DiscordApi { status, body });
        }

        let messages = response.json::<Vec<RawMessage>>().await?;
        debug!(channel_id, count = messages.len(), "fetched history page");
        Ok(messages)
    }
}
