//! Seekable streaming with HTTP range requests.
//!
//! Serves videos with `Accept-Ranges: bytes`, answering `Range` requests with
//! 206 partial content so players can seek.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use std::io::SeekFrom;
use tokio::io::AsyncSeekExt;
use webinar_common::paths::VIDEO_CONTENT_TYPE;
use webinar_common::{Error, Result};

use super::body::file_chunks;
use super::range::ByteRange;
use crate::server::error::AppError;
use crate::server::AppContext;

/// `GET /video-regular` - default video with range support.
pub async fn stream_default(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> std::result::Result<Response, AppError> {
    Ok(serve_range(&ctx, None, &headers).await?)
}

/// `GET /video-regular/{name}` - named video with range support.
pub async fn stream_named(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> std::result::Result<Response, AppError> {
    Ok(serve_range(&ctx, Some(&name), &headers).await?)
}

/// Serve a video, honoring a `Range: bytes=START-END` header when present.
pub async fn serve_range(
    ctx: &AppContext,
    name: Option<&str>,
    headers: &HeaderMap,
) -> Result<Response> {
    let video = ctx.videos.resolve(name).await?;
    let chunk_size = ctx.config.video.range_chunk_size;

    let range = requested_range(headers, video.size)?;

    match range {
        Some(range) => {
            let mut file = video.open().await?;
            file.seek(SeekFrom::Start(range.start))
                .await
                .map_err(Error::SeekFailure)?;

            tracing::debug!(
                video = %video.name,
                start = range.start,
                end = range.end,
                "Serving byte range"
            );

            let body = Body::from_stream(file_chunks(file, range.length(), chunk_size, None));

            Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, VIDEO_CONTENT_TYPE)
                .header(header::CONTENT_LENGTH, range.length().to_string())
                .header(header::CONTENT_RANGE, range.content_range(video.size))
                .header(header::ACCEPT_RANGES, "bytes")
                .body(body)
                .map_err(|e| Error::internal(e.to_string()))
        }
        None => {
            let file = video.open().await?;

            tracing::debug!(video = %video.name, size = video.size, "Serving full video");

            let body = Body::from_stream(file_chunks(file, video.size, chunk_size, None));

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, VIDEO_CONTENT_TYPE)
                .header(header::CONTENT_LENGTH, video.size.to_string())
                .header(header::ACCEPT_RANGES, "bytes")
                .body(body)
                .map_err(|e| Error::internal(e.to_string()))
        }
    }
}

/// Extract the requested range, if any. A blank header counts as absent.
fn requested_range(headers: &HeaderMap, size: u64) -> Result<Option<ByteRange>> {
    let Some(value) = headers.get(header::RANGE) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|_| Error::RangeNotSatisfiable { size })?;

    if value.trim().is_empty() {
        return Ok(None);
    }

    ByteRange::parse(value, size).map(Some)
}
