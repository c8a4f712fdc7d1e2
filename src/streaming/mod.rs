//! Video streaming module.
//!
//! Two delivery modes share name resolution and chunked bodies:
//!
//! - **Live**: the file is sent from the start, paced, with seeking and caching
//!   disabled, so every viewer experiences a broadcast.
//! - **Seekable**: standard progressive download with HTTP range requests.
//!
//! # Routes
//!
//! Live routes:
//! - `GET /video` and `GET /video/` - default video
//! - `GET /video/{name}` - named video
//!
//! Seekable routes:
//! - `GET /video-regular` and `GET /video-regular/` - default video
//! - `GET /video-regular/{name}` - named video with range support

mod body;
mod library;
mod live;
mod range;
mod seekable;

pub use body::{file_chunks, pace_for};
pub use library::{VideoFile, VideoLibrary};
pub use live::{live_default, live_named, serve_live, X_LIVE_STREAM};
pub use range::ByteRange;
pub use seekable::{serve_range, stream_default, stream_named};

use axum::{routing::get, Router};

use crate::server::AppContext;

/// Create the live streaming router, mounted at `/video`.
pub fn live_router() -> Router<AppContext> {
    Router::new()
        .route("/video", get(live_default))
        .route("/video/", get(live_default))
        .route("/video/{name}", get(live_named))
}

/// Create the seekable streaming router, mounted at `/video-regular`.
pub fn seekable_router() -> Router<AppContext> {
    Router::new()
        .route("/video-regular", get(stream_default))
        .route("/video-regular/", get(stream_default))
        .route("/video-regular/{name}", get(stream_named))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_router_creation() {
        let _router: Router<AppContext> = live_router();
    }

    #[test]
    fn test_seekable_router_creation() {
        let _router: Router<AppContext> = seekable_router();
    }
}
