//! Chat message database queries.

use rusqlite::{Connection, Row};
use webinar_common::{ChatMessageId, Error, Result, UserId};

use super::{format_timestamp, now, parse_timestamp};
use crate::models::ChatMessage;

fn row_to_message(row: &Row<'_>) -> rusqlite::Result<ChatMessage> {
    Ok(ChatMessage {
        id: ChatMessageId::from(row.get::<_, i64>(0)?),
        user_id: row.get::<_, Option<i64>>(1)?.map(UserId::from),
        username: row.get(2)?,
        message: row.get(3)?,
        timestamp: parse_timestamp(4, &row.get::<_, String>(4)?)?,
        is_admin: row.get::<_, i32>(5)? != 0,
        reply_to: row.get::<_, Option<i64>>(6)?.map(ChatMessageId::from),
    })
}

/// Store a chat message stamped with the current time.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `username` - Display name shown next to the message
/// * `message` - Message text
/// * `is_admin` - Whether the message comes from the host
/// * `user_id` - Registered attendee who posted it, if known
/// * `reply_to` - Message this one answers, if any
pub fn create_message(
    conn: &Connection,
    username: &str,
    message: &str,
    is_admin: bool,
    user_id: Option<UserId>,
    reply_to: Option<ChatMessageId>,
) -> Result<ChatMessage> {
    let timestamp = now();

    conn.execute(
        "INSERT INTO chat_messages (user_id, username, message, timestamp, is_admin, reply_to)
         VALUES (:user_id, :username, :message, :timestamp, :is_admin, :reply_to)",
        rusqlite::named_params! {
            ":user_id": user_id.map(UserId::get),
            ":username": username,
            ":message": message,
            ":timestamp": format_timestamp(&timestamp),
            ":is_admin": is_admin,
            ":reply_to": reply_to.map(ChatMessageId::get),
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(ChatMessage {
        id: ChatMessageId::from(conn.last_insert_rowid()),
        user_id,
        username: username.to_string(),
        message: message.to_string(),
        timestamp,
        is_admin,
        reply_to,
    })
}

/// List the most recent messages, newest first.
pub fn list_recent_messages(conn: &Connection, limit: usize) -> Result<Vec<ChatMessage>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, username, message, timestamp, is_admin, reply_to
             FROM chat_messages ORDER BY timestamp DESC, id DESC LIMIT :limit",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let messages = stmt
        .query_map(
            rusqlite::named_params! { ":limit": limit as i64 },
            row_to_message,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(messages)
}
