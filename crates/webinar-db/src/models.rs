//! Internal Rust models matching the database schema.
//!
//! These serialize directly into API responses, so field names follow the
//! JSON shape the web page expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use webinar_common::{ChatMessageId, UserId, WebinarId};

/// Registered attendee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub registered_at: DateTime<Utc>,
}

/// Chat message posted to the live chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: ChatMessageId,
    pub user_id: Option<UserId>,
    pub username: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub is_admin: bool,
    pub reply_to: Option<ChatMessageId>,
}

/// Webinar metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Webinar {
    pub id: WebinarId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub video_url: String,
    pub capacity: i64,
    pub registered_count: i64,
    pub is_live: bool,
}

impl Webinar {
    /// Whether every seat is taken.
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }
}

/// Fields needed to insert a webinar.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWebinar {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub video_url: String,
    pub capacity: i64,
    pub is_live: bool,
}
