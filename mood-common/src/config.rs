//! Configuration loading and setting resolution
//!
//! Every setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing config file is not an error. A malformed default config file
//! is logged and ignored; a malformed file named explicitly on the command
//! line is an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Backend URL the chat client talks to by default
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Port the playlist backend listens on by default
pub const DEFAULT_PORT: u16 = 8000;

/// Address the playlist backend binds to by default
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Environment variable overriding the client's backend URL
pub const ENV_SERVER_URL: &str = "MOOD_SERVER_URL";

/// Environment variable overriding the backend port
pub const ENV_PORT: &str = "MOOD_PD_PORT";

/// Environment variable overriding the backend bind address
pub const ENV_BIND: &str = "MOOD_PD_BIND";

/// Environment variable holding the Spotify client id
pub const ENV_SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";

/// Environment variable holding the Spotify client secret
pub const ENV_SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";

/// Contents of `config.toml`
///
/// All keys are optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Playlist backend base URL (chat client)
    pub server_url: Option<String>,
    /// Listen port (playlist backend)
    pub port: Option<u16>,
    /// Bind address (playlist backend)
    pub bind: Option<String>,
    /// Spotify client id (playlist backend)
    pub spotify_client_id: Option<String>,
    /// Spotify client secret (playlist backend)
    pub spotify_client_secret: Option<String>,
}

/// Platform config file location: `<config dir>/mood-music/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mood-music").join("config.toml"))
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Load the config file
///
/// With an explicit path the file must exist and parse. Without one the
/// platform default is tried and any problem degrades to an empty config.
pub fn load_config(explicit_path: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit_path {
        return load_toml_config(path);
    }

    let Some(path) = default_config_path() else {
        debug!("No platform config directory; using defaults");
        return Ok(TomlConfig::default());
    };

    if !path.exists() {
        debug!(path = %path.display(), "Config file not found; using defaults");
        return Ok(TomlConfig::default());
    }

    match load_toml_config(&path) {
        Ok(config) => {
            debug!(path = %path.display(), "Loaded config file");
            Ok(config)
        }
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            Ok(TomlConfig::default())
        }
    }
}

/// Resolve one setting following the priority order
///
/// An environment variable that does not parse is logged and skipped.
pub fn resolve_setting<T: FromStr>(
    cli_arg: Option<T>,
    env_var_name: &str,
    file_value: Option<T>,
    default: T,
) -> T {
    // Priority 1: Command-line argument
    if let Some(value) = cli_arg {
        return value;
    }

    // Priority 2: Environment variable
    if let Ok(raw) = std::env::var(env_var_name) {
        match raw.parse::<T>() {
            Ok(value) => return value,
            Err(_) => warn!("Ignoring invalid value for {}: {:?}", env_var_name, raw),
        }
    }

    // Priority 3: TOML config file
    if let Some(value) = file_value {
        return value;
    }

    // Priority 4: Compiled default
    default
}

/// Resolve a setting that has no compiled default
///
/// Same priority order as [`resolve_setting`]. An empty environment
/// variable counts as unset.
pub fn resolve_optional_setting<T: FromStr>(
    cli_arg: Option<T>,
    env_var_name: &str,
    file_value: Option<T>,
) -> Option<T> {
    if cli_arg.is_some() {
        return cli_arg;
    }

    if let Ok(raw) = std::env::var(env_var_name) {
        if !raw.trim().is_empty() {
            match raw.parse::<T>() {
                Ok(value) => return Some(value),
                Err(_) => warn!("Ignoring invalid value for {}", env_var_name),
            }
        }
    }

    file_value
}
