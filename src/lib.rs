//! Recap - a service that tracks Discord channels and summarizes their
//! recent history with an assistants-style AI backend.
//!
//! The pipeline: fetch a newest-first page of channel history, normalize
//! it into a chronological batch of essential messages, then drive the
//! remote thread/run workflow to completion and return the summary text.
//!
//! # Architecture
//!
//! - [`discord`] fetches raw channel history
//! - [`normalize`] reduces raw messages to their essential projection
//! - [`ai`] drives the submit-and-poll summarization protocol
//! - [`registry`] keeps the tracked-channel records in SQLite
//! - [`server`] is the thin HTTP layer dispatching to the above

pub mod ai;
pub mod core;
pub mod discord;
pub mod errors;
pub mod normalize;
pub mod registry;
pub mod server;

/// Configure structured logging for the service.
///
/// Sets up tracing-subscriber with a fmt layer and an `EnvFilter` taken
/// from `RUST_LOG`, defaulting to `info`. Call once at startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
