//! Configuration loading
//!
//! Settings are resolved in priority order:
//! 1. Command-line arguments / environment variables ([`ConfigOverrides`])
//! 2. TOML bootstrap file ([`TomlConfig`])
//! 3. Built-in defaults
//!
//! The four upstream URLs have no default. Startup fails if any of them is
//! still missing after merging.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Default per-call upstream timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub upstream: UpstreamSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[server]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub bind_addr: Option<String>,
    pub port: Option<u16>,
}

/// `[upstream]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamSection {
    pub search_artist_url: Option<String>,
    pub artist_url: Option<String>,
    pub song_url: Option<String>,
    pub lyrics_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// `[logging]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_addr: Option<String>,
    pub port: Option<u16>,
    pub search_artist_url: Option<String>,
    pub artist_url: Option<String>,
    pub song_url: Option<String>,
    pub lyrics_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

/// Upstream endpoints consumed by the proxy
///
/// Base URLs are stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Search-by-name endpoint (`?q=..&page=..` is appended)
    pub search_artist_url: String,
    /// Artist base (`/{id}` and `/{id}/songs` are appended)
    pub artist_url: String,
    /// Song metadata base (`/{id}` is appended)
    pub song_url: String,
    /// Lyrics HTML page base (`/{id}` is appended)
    pub lyrics_url: String,
    /// Timeout applied to every upstream call
    pub timeout: Duration,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub port: u16,
    pub log_level: String,
    pub upstream: UpstreamConfig,
}

impl ServiceConfig {
    /// Merge overrides, TOML values and defaults
    pub fn resolve(overrides: ConfigOverrides, toml: TomlConfig) -> Result<Self> {
        let upstream = UpstreamConfig {
            search_artist_url: required_url(
                "search_artist_url",
                overrides.search_artist_url,
                toml.upstream.search_artist_url,
            )?,
            artist_url: required_url("artist_url", overrides.artist_url, toml.upstream.artist_url)?,
            song_url: required_url("song_url", overrides.song_url, toml.upstream.song_url)?,
            lyrics_url: required_url("lyrics_url", overrides.lyrics_url, toml.upstream.lyrics_url)?,
            timeout: Duration::from_secs(
                overrides
                    .timeout_secs
                    .or(toml.upstream.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        };

        if upstream.timeout.is_zero() {
            return Err(Error::Config("timeout_secs must be greater than 0".to_string()));
        }

        Ok(Self {
            bind_addr: overrides
                .bind_addr
                .or(toml.server.bind_addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port: overrides.port.or(toml.server.port).unwrap_or(DEFAULT_PORT),
            log_level: overrides
                .log_level
                .or(toml.logging.level)
                .unwrap_or_else(|| "info".to_string()),
            upstream,
        })
    }
}

fn required_url(key: &str, primary: Option<String>, fallback: Option<String>) -> Result<String> {
    let value = primary
        .or(fallback)
        .ok_or_else(|| Error::Config(format!("{} is not configured", key)))?;

    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config(format!("{} is empty", key)));
    }

    Ok(trimmed.to_string())
}

/// Locate the default TOML file for this platform
///
/// Checks `<config dir>/lyra/config.toml` first, then `/etc/lyra/config.toml`
/// on Linux. Returns `None` when neither exists.
pub fn default_config_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("lyra").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/lyra/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Parse a TOML configuration file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Load the TOML file named on the command line, or the platform default
///
/// An explicitly requested file must exist. A missing default file is not an
/// error: built-in defaults and overrides are used instead.
pub fn load_bootstrap_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return load_toml_config(path);
    }

    match default_config_path() {
        Some(path) => match load_toml_config(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Ignoring unreadable config file {}: {}", path.display(), e);
                Ok(TomlConfig::default())
            }
        },
        None => {
            debug!("No config file found, using overrides and defaults");
            Ok(TomlConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_overrides() -> ConfigOverrides {
        ConfigOverrides {
            search_artist_url: Some("https://api.example.com/search".to_string()),
            artist_url: Some("https://api.example.com/artists/".to_string()),
            song_url: Some("https://api.example.com/songs".to_string()),
            lyrics_url: Some("https://example.com/songs/lyrics".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let config = ServiceConfig::resolve(full_overrides(), TomlConfig::default()).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.upstream.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ServiceConfig::resolve(full_overrides(), TomlConfig::default()).unwrap();
        assert_eq!(config.upstream.artist_url, "https://api.example.com/artists");
    }

    #[test]
    fn test_override_beats_toml() {
        let toml: TomlConfig = toml::from_str(
            r#"
            [server]
            port = 8080

            [upstream]
            song_url = "https://toml.example.com/songs"
            timeout_secs = 3
            "#,
        )
        .unwrap();

        let overrides = ConfigOverrides {
            port: Some(9000),
            ..full_overrides()
        };

        let config = ServiceConfig::resolve(overrides, toml).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.upstream.song_url, "https://api.example.com/songs");
        assert_eq!(config.upstream.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_toml_fills_missing_urls() {
        let toml: TomlConfig = toml::from_str(
            r#"
            [upstream]
            lyrics_url = "https://toml.example.com/lyrics"
            "#,
        )
        .unwrap();

        let overrides = ConfigOverrides {
            lyrics_url: None,
            ..full_overrides()
        };

        let config = ServiceConfig::resolve(overrides, toml).unwrap();
        assert_eq!(config.upstream.lyrics_url, "https://toml.example.com/lyrics");
    }

    #[test]
    fn test_missing_url_is_config_error() {
        let overrides = ConfigOverrides {
            song_url: None,
            ..full_overrides()
        };

        let err = ServiceConfig::resolve(overrides, TomlConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("song_url")));
    }

    #[test]
    fn test_blank_url_rejected() {
        let overrides = ConfigOverrides {
            artist_url: Some(" / ".to_string()),
            ..full_overrides()
        };

        assert!(ServiceConfig::resolve(overrides, TomlConfig::default()).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let overrides = ConfigOverrides {
            timeout_secs: Some(0),
            ..full_overrides()
        };

        assert!(ServiceConfig::resolve(overrides, TomlConfig::default()).is_err());
    }
}
