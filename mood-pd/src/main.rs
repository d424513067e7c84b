//! mood-pd (Playlist Director) - Playlist backend for mood music
//!
//! Serves `GET /chat?mood=<name>&refresh=<bool>` plus `GET /health`.
//! Playlists come from Spotify when `SPOTIFY_CLIENT_ID` and
//! `SPOTIFY_CLIENT_SECRET` resolve (CLI, environment, `.env` or config
//! file), and from the built-in catalogue otherwise.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mood_common::config::{
    self, DEFAULT_BIND, DEFAULT_PORT, ENV_BIND, ENV_PORT, ENV_SPOTIFY_CLIENT_ID,
    ENV_SPOTIFY_CLIENT_SECRET,
};
use mood_pd::catalog::PlaylistCatalog;
use mood_pd::director::PlaylistDirector;
use mood_pd::spotify::{SpotifyClient, SpotifyCredentials};
use mood_pd::{build_router, AppState};
use tracing::{info, warn};

/// Command-line arguments for mood-pd
#[derive(Parser, Debug)]
#[command(name = "mood-pd")]
#[command(about = "Playlist backend for mood music")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind to
    #[arg(short, long)]
    bind: Option<IpAddr>,

    /// Config file (default: <config dir>/mood-music/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spotify application client id
    #[arg(long, value_name = "ID")]
    spotify_client_id: Option<String>,

    /// Spotify application client secret
    #[arg(long, value_name = "SECRET")]
    spotify_client_secret: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is not up yet, so report on stderr
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded environment from {}", path.display());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("Starting mood-pd v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let file_config =
        config::load_config(args.config.as_deref()).context("Failed to load config file")?;

    let port = config::resolve_setting(args.port, ENV_PORT, file_config.port, DEFAULT_PORT);
    let file_bind = file_config
        .bind
        .as_deref()
        .map(str::parse::<IpAddr>)
        .transpose()
        .context("Invalid bind address in config file")?;
    let default_bind: IpAddr = DEFAULT_BIND.parse().context("Invalid default bind address")?;
    let bind = config::resolve_setting(args.bind, ENV_BIND, file_bind, default_bind);

    let credentials = SpotifyCredentials::from_parts(
        config::resolve_optional_setting(
            args.spotify_client_id,
            ENV_SPOTIFY_CLIENT_ID,
            file_config.spotify_client_id,
        ),
        config::resolve_optional_setting(
            args.spotify_client_secret,
            ENV_SPOTIFY_CLIENT_SECRET,
            file_config.spotify_client_secret,
        ),
    );

    let spotify = match credentials {
        Some(credentials) => match SpotifyClient::new(credentials) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("Spotify client unavailable, serving catalogue only: {}", e);
                None
            }
        },
        None => {
            info!("Spotify credentials not configured, serving catalogue only");
            None
        }
    };

    let mut director = PlaylistDirector::new(PlaylistCatalog::builtin(), spotify);
    director.enrich_catalog().await;
    let app = build_router(AppState::new(director));

    let addr = SocketAddr::new(bind, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("mood-pd listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
