mod cli;

use webinar::{config, server};
use webinar_db::models::NewWebinar;
use webinar_db::pool::{get_conn, init_pool};
use webinar_db::queries::webinars::seed_default_webinar;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting webinar server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    let db_path = database_path(&config, config_path);
    let db_path_str = db_path.to_string_lossy();
    tracing::info!("Initializing database at {}", db_path_str);
    let db_pool = init_pool(&db_path_str)?;

    seed_webinar(&db_pool, &config)?;

    server::start_server(config, db_pool).await
}

/// Configured database path, else `webinar.db` next to the config file
/// or in the current directory.
fn database_path(config: &config::Config, config_path: Option<&Path>) -> PathBuf {
    if let Some(path) = &config.database.path {
        return path.clone();
    }

    let data_dir = config_path
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    data_dir.join("webinar.db")
}

fn seed_webinar(pool: &webinar_db::pool::DbPool, config: &config::Config) -> Result<()> {
    let settings = &config.webinar;
    let now = chrono::Utc::now();
    let new = NewWebinar {
        title: settings.title.clone(),
        start_time: now,
        end_time: now + chrono::Duration::minutes(settings.duration_minutes),
        video_url: settings.morning_video.clone(),
        capacity: settings.capacity,
        is_live: settings.is_live,
    };

    let conn = get_conn(pool)?;
    match seed_default_webinar(&conn, &new).context("Failed to seed webinar")? {
        Some(webinar) => tracing::info!(id = %webinar.id, title = %webinar.title, "Seeded webinar"),
        None => tracing::debug!("Webinar already present, skipping seed"),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "webinar=trace,webinar_db=debug,webinar_common=debug,tower_http=debug".to_string()
        } else {
            "webinar=debug,webinar_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Validate { path } => {
            let path = path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("webinar {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;

    println!("Configuration is valid");
    println!("  Listen:          {}:{}", config.server.host, config.server.port);
    println!("  Video dir:       {}", config.video.dir.display());
    println!("  Default video:   {}", config.video.default_video);
    println!(
        "  Live chunks:     {} bytes every {} ms",
        config.video.live_chunk_size, config.video.live_chunk_delay_ms
    );
    println!("  Range chunks:    {} bytes", config.video.range_chunk_size);
    println!(
        "  Webinar:         {} ({} seats)",
        config.webinar.title, config.webinar.capacity
    );

    Ok(())
}
