mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;
use webinar_common::paths::validate_video_name;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./config.toml",
        "./webinar.toml",
        "~/.config/webinar/config.toml",
        "/etc/webinar/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if config.video.live_chunk_size == 0 || config.video.range_chunk_size == 0 {
        anyhow::bail!("Video chunk sizes must be greater than 0");
    }

    validate_video_name(&config.video.default_video)
        .with_context(|| format!("Invalid default video: {:?}", config.video.default_video))?;
    validate_video_name(&config.webinar.morning_video)
        .with_context(|| format!("Invalid morning video: {:?}", config.webinar.morning_video))?;
    validate_video_name(&config.webinar.evening_video)
        .with_context(|| format!("Invalid evening video: {:?}", config.webinar.evening_video))?;

    if !config.video.dir.is_dir() {
        tracing::warn!("Video directory does not exist: {:?}", config.video.dir);
    }

    if config.webinar.evening_cutover_hour > 23 {
        anyhow::bail!(
            "evening_cutover_hour must be between 0 and 23, got {}",
            config.webinar.evening_cutover_hour
        );
    }

    if config.webinar.capacity < 0 {
        anyhow::bail!("Webinar capacity cannot be negative");
    }

    if config.webinar.duration_minutes <= 0 {
        anyhow::bail!("Webinar duration must be positive");
    }

    Ok(())
}
