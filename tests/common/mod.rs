//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, a temporary video
//! directory, and a full [`AppContext`]. The [`TestHarness::with_server`]
//! constructor starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use webinar::config::Config;
use webinar::server::{create_router, AppContext};
use webinar_db::models::NewWebinar;
use webinar_db::pool::{init_memory_pool, DbPool};

/// Size of `video1.mp4` in every harness.
pub const VIDEO1_SIZE: usize = 1000;
/// Size of `video2.mp4` in every harness.
pub const VIDEO2_SIZE: usize = 300;

/// Deterministic file contents so byte offsets can be checked.
pub fn video_bytes(len: usize) -> Vec<u8> {
    (0..=255u8).cycle().take(len).collect()
}

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database and a temporary video directory.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
    pub videos: tempfile::TempDir,
}

impl TestHarness {
    /// Create a new harness with pacing disabled.
    pub fn new() -> Self {
        let mut config = Config::default();
        config.video.live_chunk_delay_ms = 0;
        Self::with_config(config)
    }

    /// Create a new harness with a custom configuration. The video directory
    /// is always replaced with a fresh temporary one.
    pub fn with_config(mut config: Config) -> Self {
        let videos = tempfile::tempdir().expect("failed to create video dir");
        std::fs::write(videos.path().join("video1.mp4"), video_bytes(VIDEO1_SIZE))
            .expect("failed to write video1");
        std::fs::write(videos.path().join("video2.mp4"), video_bytes(VIDEO2_SIZE))
            .expect("failed to write video2");

        config.video.dir = videos.path().to_path_buf();

        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(config, db.clone());

        Self { ctx, db, videos }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let addr = harness.serve().await;
        (harness, addr)
    }

    /// Serve this harness's context on a random port.
    pub async fn serve(&self) -> SocketAddr {
        let app = create_router(self.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        addr
    }

    /// Send one request through the router without a socket.
    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        create_router(self.ctx.clone())
            .oneshot(req)
            .await
            .expect("router is infallible")
    }

    /// `GET uri`, optionally with a `Range` header.
    pub async fn get(&self, uri: &str, range: Option<&str>) -> Response<Body> {
        let mut builder = Request::get(uri);
        if let Some(range) = range {
            builder = builder.header("range", range);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// `POST uri` with a raw JSON body.
    pub async fn post_json(&self, uri: &str, body: &str) -> Response<Body> {
        self.request(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Insert the webinar row registration and `/api/webinar` depend on.
    pub fn seed_webinar(&self, capacity: i64) {
        let now = chrono::Utc::now();
        let conn = self.conn();
        webinar_db::queries::webinars::create_webinar(
            &conn,
            &NewWebinar {
                title: "Test Webinar".into(),
                start_time: now,
                end_time: now + chrono::Duration::minutes(75),
                video_url: "video1.mp4".into(),
                capacity,
                is_live: true,
            },
        )
        .expect("failed to seed webinar");
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> webinar_db::pool::PooledConnection {
        webinar_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
