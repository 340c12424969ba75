use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registry record for a tracked channel.
///
/// Records are replaced wholesale on write; the newest write wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub guild_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_id: Option<String>,
    pub last_check: DateTime<Utc>,
    pub active: bool,
}

/// Message author as Discord returns it. Only the fields the pipeline
/// reads are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageAuthor {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionEmoji {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawReaction {
    pub emoji: ReactionEmoji,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    pub url: String,
}

/// Pointer carried by a message that replies to another one.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageReference {
    pub message_id: String,
}

/// Provider-native message, deserialized straight off the Discord REST
/// payload. Owned transiently by the fetch call; the normalizer consumes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub id: String,
    pub content: String,
    pub author: MessageAuthor,
    pub timestamp: String,
    #[serde(default)]
    pub mentions: Vec<MessageAuthor>,
    #[serde(default)]
    pub reactions: Vec<RawReaction>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub pinned: bool,
    pub message_reference: Option<MessageReference>,
    pub referenced_message: Option<Box<RawMessage>>,
}

/// A reaction kept on the essential projection. Only counts above zero
/// survive normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionSummary {
    pub emoji: String,
    pub count: u64,
}

/// Best-effort context for a reply. `author` and `content_preview` are
/// filled from the referenced message when the provider resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyContext {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_preview: Option<String>,
}

/// The minimized, display-ready projection of a raw chat message.
///
/// Every optional field is `None` when its source data is empty or unset,
/// and `skip_serializing_if` keeps it out of the serialized record
/// entirely. Consumers can rely on absent-means-empty: no field is ever
/// present holding an empty list, `false`, or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssentialMessage {
    pub id: String,
    pub timestamp: String,
    pub author: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<ReactionSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_attachments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replying_to: Option<ReplyContext>,
}
