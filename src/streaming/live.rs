//! Live-mode streaming.
//!
//! Simulates a broadcast: the whole file is sent from the start with seeking
//! disabled and caching forbidden, paced by a short delay between chunks.
//! `Range` headers are ignored.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::Response,
};
use webinar_common::paths::VIDEO_CONTENT_TYPE;
use webinar_common::{Error, Result};

use super::body::{file_chunks, pace_for};
use crate::server::error::AppError;
use crate::server::AppContext;

/// Marks responses produced by the live endpoint.
pub static X_LIVE_STREAM: HeaderName = HeaderName::from_static("x-live-stream");

/// `GET /video` - default video as a live stream.
pub async fn live_default(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> std::result::Result<Response, AppError> {
    Ok(serve_live(&ctx, None, &headers).await?)
}

/// `GET /video/{name}` - named video as a live stream.
pub async fn live_named(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> std::result::Result<Response, AppError> {
    Ok(serve_live(&ctx, Some(&name), &headers).await?)
}

/// Stream a video from byte 0 with seeking and caching disabled.
pub async fn serve_live(
    ctx: &AppContext,
    name: Option<&str>,
    headers: &HeaderMap,
) -> Result<Response> {
    let video = ctx.videos.resolve(name).await?;

    if headers.contains_key(header::RANGE) {
        tracing::debug!(video = %video.name, "Ignoring Range header on live stream");
    }

    let file = video.open().await?;
    let settings = &ctx.config.video;

    tracing::debug!(video = %video.name, size = video.size, "Starting live stream");

    let body = Body::from_stream(file_chunks(
        file,
        video.size,
        settings.live_chunk_size,
        pace_for(settings.live_chunk_delay()),
    ));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, VIDEO_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, video.size.to_string())
        .header(header::ACCEPT_RANGES, "none")
        .header(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")
        .header(header::PRAGMA, "no-cache")
        .header(header::EXPIRES, "0")
        .header(X_LIVE_STREAM.clone(), "true")
        .body(body)
        .map_err(|e| Error::internal(e.to_string()))
}
