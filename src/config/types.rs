use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub video: VideoConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub webinar: WebinarConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS (empty = any origin)
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VideoConfig {
    /// Directory videos are served from
    #[serde(default = "default_video_dir")]
    pub dir: PathBuf,

    /// Served when a request names no video
    #[serde(default = "default_video")]
    pub default_video: String,

    /// Read size for live streams, in bytes
    #[serde(default = "default_live_chunk_size")]
    pub live_chunk_size: usize,

    /// Read size for seekable streams, in bytes
    #[serde(default = "default_range_chunk_size")]
    pub range_chunk_size: usize,

    /// Pause between live chunks to emulate real-time delivery
    #[serde(default = "default_live_chunk_delay_ms")]
    pub live_chunk_delay_ms: u64,
}

fn default_video_dir() -> PathBuf {
    PathBuf::from("./videos")
}
fn default_video() -> String {
    "video1.mp4".to_string()
}
fn default_live_chunk_size() -> usize {
    64 * 1024
}
fn default_range_chunk_size() -> usize {
    32 * 1024
}
fn default_live_chunk_delay_ms() -> u64 {
    10
}

impl VideoConfig {
    pub fn live_chunk_delay(&self) -> Duration {
        Duration::from_millis(self.live_chunk_delay_ms)
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            dir: default_video_dir(),
            default_video: default_video(),
            live_chunk_size: default_live_chunk_size(),
            range_chunk_size: default_range_chunk_size(),
            live_chunk_delay_ms: default_live_chunk_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite file (default: `webinar.db` next to the config file)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Webinar seeded on first start, plus the video schedule shown to clients.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebinarConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: i64,

    #[serde(default = "default_capacity")]
    pub capacity: i64,

    #[serde(default = "default_is_live")]
    pub is_live: bool,

    /// Video announced before the cut-over hour
    #[serde(default = "default_video")]
    pub morning_video: String,

    /// Video announced from the cut-over hour on
    #[serde(default = "default_evening_video")]
    pub evening_video: String,

    /// Local hour (0-23) at which the evening video takes over
    #[serde(default = "default_evening_cutover_hour")]
    pub evening_cutover_hour: u32,
}

fn default_title() -> String {
    "Building a Dollar-Earning System with AI".to_string()
}
fn default_duration_minutes() -> i64 {
    75
}
fn default_capacity() -> i64 {
    500
}
fn default_is_live() -> bool {
    true
}
fn default_evening_video() -> String {
    "video2.mp4".to_string()
}
fn default_evening_cutover_hour() -> u32 {
    18
}

impl WebinarConfig {
    /// Video announced for the given local hour.
    pub fn video_for_hour(&self, hour: u32) -> &str {
        if hour < self.evening_cutover_hour {
            &self.morning_video
        } else {
            &self.evening_video
        }
    }
}

impl Default for WebinarConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            duration_minutes: default_duration_minutes(),
            capacity: default_capacity(),
            is_live: default_is_live(),
            morning_video: default_video(),
            evening_video: default_evening_video(),
            evening_cutover_hour: default_evening_cutover_hour(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_defaults() {
        let video = VideoConfig::default();
        assert_eq!(video.default_video, "video1.mp4");
        assert_eq!(video.live_chunk_size, 65536);
        assert_eq!(video.range_chunk_size, 32768);
        assert_eq!(video.live_chunk_delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_video_for_hour() {
        let webinar = WebinarConfig::default();
        assert_eq!(webinar.video_for_hour(0), "video1.mp4");
        assert_eq!(webinar.video_for_hour(17), "video1.mp4");
        assert_eq!(webinar.video_for_hour(18), "video2.mp4");
        assert_eq!(webinar.video_for_hour(23), "video2.mp4");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [video]
            live_chunk_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.video.live_chunk_delay_ms, 0);
        assert_eq!(config.video.default_video, "video1.mp4");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.webinar.capacity, 500);
    }
}
