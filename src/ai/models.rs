use std::fmt;

use serde::{Deserialize, Serialize};

/// A remote conversation thread; created once per summarization call and
/// never reused.
#[derive(Debug, Clone, Deserialize)]
pub struct Thread {
    pub id: String,
}

/// Lifecycle states of an assistant run.
///
/// `Queued` and `InProgress` are the only states the poller keeps waiting
/// on. `Completed` is the sole success terminal; every other terminal
/// state fails the summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Expired,
}

impl RunState {
    /// Whether no further transition can occur.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Queued | Self::InProgress)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::RequiresAction => "requires_action",
            Self::Cancelling => "cancelling",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::Completed => "completed",
            Self::Expired => "expired",
        };
        f.write_str(name)
    }
}

/// One execution of the assistant against a thread.
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: RunState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageText {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageContent {
    #[serde(default)]
    pub text: Option<MessageText>,
}

/// A single turn in a thread, as returned by the message listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    pub id: String,
    pub role: String,
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

/// Thread message listing; the backend returns turns newest-first.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageList {
    #[serde(default)]
    pub data: Vec<AssistantMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_parsing() {
        let json_str = r#"{"id": "run_abc", "object": "thread.run", "status": "in_progress"}"#;
        let run: Run = serde_json::from_str(json_str).unwrap();

        assert_eq!(run.id, "run_abc");
        assert_eq!(run.status, RunState::InProgress);
    }

    #[test]
    fn test_only_queued_and_in_progress_are_non_terminal() {
        assert!(!RunState::Queued.is_terminal());
        assert!(!RunState::InProgress.is_terminal());

        for state in [
            RunState::RequiresAction,
            RunState::Cancelling,
            RunState::Cancelled,
            RunState::Failed,
            RunState::Completed,
            RunState::Expired,
        ] {
            assert!(state.is_terminal(), "{state} should be terminal");
        }
    }

    #[test]
    fn test_run_state_display_matches_wire_names() {
        assert_eq!(RunState::InProgress.to_string(), "in_progress");
        assert_eq!(RunState::RequiresAction.to_string(), "requires_action");
        assert_eq!(RunState::Failed.to_string(), "failed");
    }

    #[test]
    fn test_message_listing_parsing() {
        let json_str = r#"{
            "object": "list",
            "data": [
                {
                    "id": "msg_2",
                    "role": "assistant",
                    "content": [{"type": "text", "text": {"value": "\"done\"", "annotations": []}}]
                },
                {
                    "id": "msg_1",
                    "role": "user",
                    "content": [{"type": "text", "text": {"value": "raw", "annotations": []}}]
                }
            ]
        }"#;
        let listing: MessageList = serde_json::from_str(json_str).unwrap();

        assert_eq!(listing.data.len(), 2);
        assert_eq!(listing.data[0].role, "assistant");
        assert_eq!(
            listing.data[0].content[0].text.as_ref().unwrap().value,
            "\"done\""
        );
    }

    #[test]
    fn test_message_listing_tolerates_missing_fields() {
        let listing: MessageList = serde_json::from_str(r#"{"object": "list"}"#).unwrap();
        assert!(listing.data.is_empty());

        let listing: MessageList = serde_json::from_str(
            r#"{"data": [{"id": "msg_1", "role": "assistant", "content": [{"type": "image_file"}]}]}"#,
        )
        .unwrap();
        assert!(listing.data[0].content[0].text.is_none());
    }
}
