//! Submit-and-poll summarization driver.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::{AssistantApi, RunState};
use crate::core::models::EssentialMessage;
use crate::errors::RecapError;

/// Sentinel returned for an empty batch; no remote call is made.
pub const NO_MESSAGES: &str = "No messages";

/// Sentinel returned when the completed thread holds no assistant turn.
pub const NO_RESPONSE: &str = "No response";

/// Delay between run status polls.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Render a batch as the single text blob posted to the conversation.
///
/// Each record is compact JSON carrying only the present fields, and the
/// records are concatenated without a separator. Dense on purpose: the
/// assistant consumes it, nobody reads it.
///
/// # Errors
///
/// Returns an error if a record fails to serialize.
pub fn render_batch(batch: &[EssentialMessage]) -> Result<String, RecapError> {
    let mut blob = String::new();
    for message in batch {
        blob.push_str(&serde_json::to_string(message)?);
    }
    Ok(blob)
}

/// Drives one summarization job to completion against a backend.
///
/// Each call is strictly sequential (create thread, post content, start
/// run, poll, fetch result) and touches no shared state; concurrent calls
/// run against independent threads.
pub struct Summarizer<A> {
    backend: A,
    poll_timeout: Option<Duration>,
}

impl<A: AssistantApi> Summarizer<A> {
    #[must_use]
    pub fn new(backend: A) -> Self {
        Self {
            backend,
            poll_timeout: None,
        }
    }

    /// Bound the polling phase.
    ///
    /// This is added hardening: the reference behavior polls indefinitely,
    /// and that remains the default when no timeout is configured.
    #[must_use]
    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = Some(timeout);
        self
    }

    /// Consume the summarizer and hand the backend back.
    #[must_use]
    pub fn into_inner(self) -> A {
        self.backend
    }

    /// Summarize a chronological batch of essential messages.
    ///
    /// An empty batch short-circuits to [`NO_MESSAGES`] without touching
    /// the backend. Otherwise the rendered batch is posted to a fresh
    /// thread, a run is started and polled once a second until it leaves
    /// `queued`/`in_progress`, and the newest assistant turn of the thread
    /// is deserialized into the returned text. A completed thread with no
    /// assistant turn returns [`NO_RESPONSE`] as-is.
    ///
    /// # Errors
    ///
    /// A non-success backend response, a terminal run state other than
    /// `completed`, a final payload that is not valid JSON, or the
    /// configured poll timeout elapsing.
    pub async fn summarize(&self, batch: &[EssentialMessage]) -> Result<String, RecapError> {
        if batch.is_empty() {
            return Ok(NO_MESSAGES.to_string());
        }

        let content = render_batch(batch)?;

        let thread = self.backend.create_thread().await?;
        self.backend.add_message(&thread.id, &content).await?;

        let run = self.backend.create_run(&thread.id).await?;
        debug!(thread_id = %thread.id, run_id = %run.id, "run started");

        let deadline = self
            .poll_timeout
            .map(|timeout| tokio::time::Instant::now() + timeout);

        let mut status = run.status;
        while !status.is_terminal() {
            if let Some(deadline) = deadline
                && tokio::time::Instant::now() >= deadline
            {
                return Err(RecapError::RunTimedOut(
                    self.poll_timeout.unwrap_or_default().as_secs(),
                ));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
            status = self.backend.get_run(&thread.id, &run.id).await?.status;
        }

        if status != RunState::Completed {
            return Err(RecapError::RunFailed(status));
        }

        let listing = self.backend.list_messages(&thread.id).await?;
        let Some(turn) = listing.data.iter().find(|msg| msg.role == "assistant") else {
            return Ok(NO_RESPONSE.to_string());
        };

        // The assistant's payload is itself serialized JSON; a turn whose
        // text is missing or malformed is a hard error, not a degraded
        // return.
        let payload = turn
            .content
            .first()
            .and_then(|part| part.text.as_ref())
            .map_or("", |text| text.value.as_str());

        let value: Value = serde_json::from_str(payload)?;
        Ok(match value {
            Value::String(text) => text,
            other => other.to_string(),
        })
    }
}
