//! Assistant backend integration.
//!
//! Wire types for the threads/runs protocol, the backend trait, the HTTP
//! client, and the summarizer that drives the submit-and-poll workflow.

mod client;
mod models;
mod summarizer;

pub use client::AssistantClient;
pub use models::{AssistantMessage, MessageContent, MessageList, MessageText, Run, RunState, Thread};
pub use summarizer::{NO_MESSAGES, NO_RESPONSE, Summarizer, render_batch};

use async_trait::async_trait;

use crate::errors::RecapError;

/// Remote operations of the assistants-style backend.
///
/// [`AssistantClient`] speaks HTTP; tests script the run state machine
/// with an in-process fake.
#[async_trait]
pub trait AssistantApi {
    /// Create a fresh conversation thread.
    async fn create_thread(&self) -> Result<Thread, RecapError>;

    /// Post `content` as a single user-authored turn in the thread.
    async fn add_message(&self, thread_id: &str, content: &str) -> Result<(), RecapError>;

    /// Start a run of the configured assistant against the thread.
    async fn create_run(&self, thread_id: &str) -> Result<Run, RecapError>;

    /// Re-fetch a run's current state.
    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run, RecapError>;

    /// List the thread's turns, newest first.
    async fn list_messages(&self, thread_id: &str) -> Result<MessageList, RecapError>;
}
