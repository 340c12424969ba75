//! Channel registry backed by SQLite.
//!
//! One long-lived connection owned by the registry, opened at startup and
//! injected where needed. Single-record reads and writes only; a write
//! replaces the whole record, so the last write wins.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::core::models::Channel;
use crate::errors::RecapError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS channels (
    id TEXT PRIMARY KEY,
    guild_id TEXT NOT NULL,
    name TEXT NOT NULL,
    last_message_id TEXT,
    last_check TEXT NOT NULL,
    active INTEGER NOT NULL
)";

const CHANNEL_COLUMNS: &str = "id, guild_id, name, last_message_id, last_check, active";

pub struct ChannelRegistry {
    conn: Mutex<Connection>,
}

impl ChannelRegistry {
    /// Open (or create) the registry at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be applied.
    pub fn open(path: &Path) -> Result<Self, RecapError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory registry; used by tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be created.
    pub fn open_in_memory() -> Result<Self, RecapError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, RecapError> {
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace a channel record.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn put(&self, channel: &Channel) -> Result<(), RecapError> {
        self.conn().execute(
            "INSERT OR REPLACE INTO channels (id, guild_id, name, last_message_id, last_check, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                channel.id,
                channel.guild_id,
                channel.name,
                channel.last_message_id,
                channel.last_check.to_rfc3339(),
                channel.active,
            ],
        )?;
        Ok(())
    }

    /// Look up a single channel by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn get(&self, id: &str) -> Result<Option<Channel>, RecapError> {
        let conn = self.conn();
        let channel = conn
            .query_row(
                &format!("SELECT {CHANNEL_COLUMNS} FROM channels WHERE id = ?1"),
                params![id],
                row_to_channel,
            )
            .optional()?;
        Ok(channel)
    }

    /// All channels currently marked active, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    pub fn get_active(&self) -> Result<Vec<Channel>, RecapError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {CHANNEL_COLUMNS} FROM channels WHERE active = 1 ORDER BY name"
        ))?;
        let rows = stmt.query_map([], row_to_channel)?;

        let mut channels = Vec::new();
        for row in rows {
            channels.push(row?);
        }
        Ok(channels)
    }
}

fn row_to_channel(row: &rusqlite::Row<'_>) -> rusqlite::Result<Channel> {
    let last_check: String = row.get(4)?;
    let last_check = DateTime::parse_from_rfc3339(&last_check)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);

    Ok(Channel {
        id: row.get(0)?,
        guild_id: row.get(1)?,
        name: row.get(2)?,
        last_message_id: row.get(3)?,
        last_check,
        active: row.get(5)?,
    })
}
