use crate::server::error::AppError;
use crate::server::AppContext;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use webinar_common::Error;
use webinar_db::models::{ChatMessage, User};
use webinar_db::pool::get_conn;
use webinar_db::queries::{chat, users, webinars};

/// Number of messages returned by the chat feed.
pub const CHAT_HISTORY_LIMIT: usize = 30;

/// Username recorded when a chat message arrives without one.
pub const DEFAULT_CHAT_USERNAME: &str = "you";

pub fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/register", post(register))
        .route("/webinar", get(webinar_info))
        .route("/chat", get(list_chat).post(post_chat))
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: User,
}

async fn register(
    State(ctx): State<AppContext>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!("Rejected registration body: {}", e);
        AppError::invalid_request()
    })?;

    if req.phone.trim().is_empty() {
        return Err(AppError::invalid_request());
    }

    let conn = get_conn(&ctx.db)?;
    let user = users::register_attendee(&conn, &req.first_name, &req.last_name, &req.phone)
        .map_err(|e| match e {
            Error::Internal(_) | Error::Forbidden(_) | Error::Conflict(_) => e,
            other => {
                tracing::error!("Registration failed: {}", other);
                Error::internal("Failed to register")
            }
        })?;

    tracing::info!(user_id = %user.id, "New registration");

    Ok(Json(RegisterResponse {
        message: "Registration successful",
        user,
    }))
}

#[derive(Debug, Serialize)]
pub struct WebinarInfo {
    pub title: String,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub video_url: String,
    pub capacity: i64,
    pub registered_count: i64,
    pub is_live: bool,
}

async fn webinar_info(State(ctx): State<AppContext>) -> Result<Json<WebinarInfo>, AppError> {
    let conn = get_conn(&ctx.db)?;
    let webinar = webinars::get_first_webinar(&conn)?
        .ok_or_else(|| Error::internal("Webinar not found"))?;

    let hour = Local::now().hour();
    let video_url = format!("/video/{}", ctx.config.webinar.video_for_hour(hour));

    Ok(Json(WebinarInfo {
        title: webinar.title,
        start_time: webinar.start_time,
        end_time: webinar.end_time,
        video_url,
        capacity: webinar.capacity,
        registered_count: webinar.registered_count,
        is_live: webinar.is_live,
    }))
}

#[derive(Debug, Serialize)]
pub struct ChatFeed {
    pub messages: Vec<ChatMessage>,
}

async fn list_chat(State(ctx): State<AppContext>) -> Result<Json<ChatFeed>, AppError> {
    let conn = get_conn(&ctx.db)?;
    let messages = chat::list_recent_messages(&conn, CHAT_HISTORY_LIMIT)?;
    Ok(Json(ChatFeed { messages }))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatPosted {
    pub message: ChatMessage,
}

async fn post_chat(
    State(ctx): State<AppContext>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatPosted>, AppError> {
    let Json(req) = payload.map_err(|_| AppError::invalid_request())?;

    if req.message.is_empty() {
        return Err(AppError::invalid_request());
    }

    let username = if req.username.is_empty() {
        DEFAULT_CHAT_USERNAME
    } else {
        req.username.as_str()
    };

    let saved = get_conn(&ctx.db)
        .and_then(|conn| chat::create_message(&conn, username, &req.message, false, None, None));

    match saved {
        Ok(message) => Ok(Json(ChatPosted { message })),
        Err(e) => {
            tracing::error!("Failed to save chat message: {}", e);
            Err(Error::internal("Failed to save message").into())
        }
    }
}
