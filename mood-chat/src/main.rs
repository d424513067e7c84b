//! mood-chat - Mood music chat client
//!
//! Reads messages from stdin, classifies each into a mood and prints a
//! playlist for it fetched from the playlist backend.
//!
//! Commands:
//! - `/refresh` - new selection for the current mood
//! - `/mood` - show the current mood
//! - `/quit` - exit

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use mood_chat::render::{render_outcome, LOADING_LINE};
use mood_chat::{CannedPlaylistSource, ChatController, HttpPlaylistSource, PlaylistSource};
use mood_common::config::{self, DEFAULT_SERVER_URL, ENV_SERVER_URL};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Delay of the simulated bot's reply
const OFFLINE_REPLY_DELAY: Duration = Duration::from_secs(1);

/// Command-line arguments for mood-chat
#[derive(Parser, Debug)]
#[command(name = "mood-chat")]
#[command(about = "Chat about your mood, get a playlist")]
#[command(version)]
struct Args {
    /// Playlist backend base URL
    #[arg(short, long)]
    server_url: Option<String>,

    /// Chat with the simulated bot instead of the backend
    #[arg(long)]
    offline: bool,

    /// Send a single message, print the result and exit
    #[arg(long, value_name = "TEXT")]
    once: Option<String>,

    /// Config file (default: <config dir>/mood-music/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, chat output to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_chat=info".into()),
        )
        .init();

    let args = Args::parse();

    let source: Arc<dyn PlaylistSource> = if args.offline {
        info!("Offline mode: using simulated bot");
        Arc::new(CannedPlaylistSource::new().with_delay(OFFLINE_REPLY_DELAY))
    } else {
        let file_config =
            config::load_config(args.config.as_deref()).context("Failed to load config file")?;
        let server_url = config::resolve_setting(
            args.server_url,
            ENV_SERVER_URL,
            file_config.server_url,
            DEFAULT_SERVER_URL.to_string(),
        );
        info!("Playlist backend: {}", server_url);
        Arc::new(HttpPlaylistSource::new(server_url).context("Failed to create HTTP client")?)
    };

    let controller = ChatController::new(source);

    if let Some(text) = args.once {
        send(&controller, &text).await;
        return Ok(());
    }

    println!("Mood Music - type how you feel (/refresh, /mood, /quit)");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/mood" => println!("Current mood: {}", controller.snapshot().await.mood),
            "/refresh" => refresh(&controller).await,
            _ => send(&controller, &line).await,
        }
        prompt()?;
    }

    info!("Goodbye");
    Ok(())
}

async fn send(controller: &ChatController, text: &str) {
    let history_len = controller.snapshot().await.messages.len();
    if !text.trim().is_empty() {
        println!("{}", LOADING_LINE);
    }
    match controller.submit(text).await {
        Ok(outcome) => print!(
            "{}",
            render_outcome(&controller.snapshot().await, &outcome, history_len)
        ),
        Err(e) => println!("{}", e),
    }
}

async fn refresh(controller: &ChatController) {
    let history_len = controller.snapshot().await.messages.len();
    println!("{}", LOADING_LINE);
    match controller.refresh().await {
        Ok(outcome) => print!(
            "{}",
            render_outcome(&controller.snapshot().await, &outcome, history_len)
        ),
        Err(e) => println!("{}", e),
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush().context("Failed to flush stdout")
}
