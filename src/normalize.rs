//! Message normalization pipeline.
//!
//! Reduces provider-native messages to the essential projection the
//! summarizer consumes. Pure and total: no I/O, no errors.

use crate::core::models::{EssentialMessage, RawMessage, ReactionSummary, ReplyContext};

/// Characters kept from a replied-to message's content.
const REPLY_PREVIEW_CHARS: usize = 100;

/// Normalize one page of provider messages into a chronological batch.
///
/// Bot-authored messages and messages with blank content are dropped,
/// survivors are projected to [`EssentialMessage`], and the batch is
/// reversed so the oldest message comes first (the provider returns
/// newest-first pages). An empty input yields an empty batch.
#[must_use]
pub fn normalize(messages: Vec<RawMessage>) -> Vec<EssentialMessage> {
    let mut batch: Vec<EssentialMessage> = messages
        .into_iter()
        .filter(|msg| !msg.author.bot && !msg.content.trim().is_empty())
        .map(project)
        .collect();

    batch.reverse();
    batch
}

fn project(msg: RawMessage) -> EssentialMessage {
    let mentions = if msg.mentions.is_empty() {
        None
    } else {
        Some(msg.mentions.into_iter().map(|user| user.username).collect())
    };

    // A reaction listing where every count is zero produces no field at
    // all, not an empty list.
    let reactions: Vec<ReactionSummary> = msg
        .reactions
        .into_iter()
        .filter(|reaction| reaction.count > 0)
        .map(|reaction| ReactionSummary {
            emoji: reaction.emoji.name,
            count: reaction.count,
        })
        .collect();
    let reactions = if reactions.is_empty() {
        None
    } else {
        Some(reactions)
    };

    let replying_to = msg.message_reference.map(|reference| {
        let referenced = msg.referenced_message.as_deref();
        ReplyContext {
            id: reference.message_id,
            author: referenced.map(|parent| parent.author.username.clone()),
            content_preview: referenced
                .map(|parent| {
                    parent
                        .content
                        .chars()
                        .take(REPLY_PREVIEW_CHARS)
                        .collect::<String>()
                })
                .filter(|preview| !preview.is_empty()),
        }
    });

    EssentialMessage {
        id: msg.id,
        timestamp: msg.timestamp,
        author: msg.author.username,
        content: msg.content,
        mentions,
        reactions,
        has_attachments: if msg.attachments.is_empty() {
            None
        } else {
            Some(true)
        },
        pinned: if msg.pinned { Some(true) } else { None },
        replying_to,
    }
}
