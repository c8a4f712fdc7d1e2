//! Integration tests for configuration loading and validation.

use std::io::Write;

use webinar::config::{load_config, load_config_or_default, validate_config, Config};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn load_full_config() {
    let file = write_config(
        r#"
        [server]
        host = "127.0.0.1"
        port = 9000
        allowed_origins = ["http://localhost:3000"]

        [video]
        dir = "/srv/videos"
        default_video = "intro.mp4"
        live_chunk_size = 131072
        range_chunk_size = 16384
        live_chunk_delay_ms = 0

        [database]
        path = "/var/lib/webinar/webinar.db"

        [webinar]
        title = "Evening Session"
        capacity = 50
        evening_cutover_hour = 20
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.allowed_origins, vec!["http://localhost:3000"]);
    assert_eq!(config.video.default_video, "intro.mp4");
    assert_eq!(config.video.live_chunk_size, 131072);
    assert_eq!(config.video.range_chunk_size, 16384);
    assert_eq!(config.video.live_chunk_delay_ms, 0);
    assert_eq!(
        config.database.path.as_deref(),
        Some(std::path::Path::new("/var/lib/webinar/webinar.db"))
    );
    assert_eq!(config.webinar.title, "Evening Session");
    assert_eq!(config.webinar.capacity, 50);
    assert_eq!(config.webinar.video_for_hour(19), "video1.mp4");
    assert_eq!(config.webinar.video_for_hour(20), "video2.mp4");
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.video.live_chunk_size, 64 * 1024);
    assert_eq!(config.video.range_chunk_size, 32 * 1024);
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_config_or_default(Some(&missing)).is_err());
}

#[test]
fn invalid_toml_is_rejected() {
    let file = write_config("[server\nport = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn validation_rejects_bad_values() {
    let mut config = Config::default();
    config.server.port = 0;
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.video.live_chunk_size = 0;
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.video.range_chunk_size = 0;
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.video.default_video = "../secret.mp4".into();
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.webinar.evening_video = "clips/b.mp4".into();
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.webinar.evening_cutover_hour = 24;
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.webinar.capacity = -1;
    assert!(validate_config(&config).is_err());

    let mut config = Config::default();
    config.webinar.duration_minutes = 0;
    assert!(validate_config(&config).is_err());
}

#[test]
fn defaults_are_valid() {
    validate_config(&Config::default()).unwrap();
}
