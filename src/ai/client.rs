//! HTTP client for the assistants backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::{AssistantApi, MessageList, Run, Thread};
use crate::errors::RecapError;

/// Bearer-authenticated client for the assistants REST surface.
///
/// Credentials and endpoint come in at construction; nothing here reads
/// the environment.
pub struct AssistantClient {
    http: Client,
    api_url: String,
    api_key: String,
    assistant_id: String,
}

impl AssistantClient {
    #[must_use]
    pub fn new(api_url: String, api_key: String, assistant_id: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_url,
            api_key,
            assistant_id,
        }
    }

    /// Issue one backend request and deserialize its body.
    ///
    /// Any non-2xx response becomes [`RecapError::AssistantApi`] carrying
    /// the status and response text; it is never swallowed.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, RecapError> {
        let mut request = self
            .http
            .request(method, format!("{}{}", self.api_url, endpoint))
            .bearer_auth(&self.api_key)
            .header("OpenAI-Beta", "assistants=v2");

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecapError::AssistantApi { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl AssistantApi for AssistantClient {
    async fn create_thread(&self) -> Result<Thread, RecapError> {
        self.request(Method::POST, "/threads", None).await
    }

    async fn add_message(&self, thread_id: &str, content: &str) -> Result<(), RecapError> {
        self.request::<Value>(
            Method::POST,
            &format!("/threads/{thread_id}/messages"),
            Some(json!({ "role": "user", "content": content })),
        )
        .await
        .map(|_| ())
    }

    async fn create_run(&self, thread_id: &str) -> Result<Run, RecapError> {
        self.request(
            Method::POST,
            &format!("/threads/{thread_id}/runs"),
            Some(json!({ "assistant_id": self.assistant_id })),
        )
        .await
    }

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run, RecapError> {
        self.request(
            Method::GET,
            &format!("/threads/{thread_id}/runs/{run_id}"),
            None,
        )
        .await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, RecapError> {
        self.request(Method::GET, &format!("/threads/{thread_id}/messages"), None)
            .await
    }
}
