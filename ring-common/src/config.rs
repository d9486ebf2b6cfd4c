//! Configuration loading for ring-api
//!
//! Each setting resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! Command-line and environment values both arrive through clap's `env`
//! support, so this module only sees them merged as [`Overrides`].
//!
//! A missing config file is not an error: the service starts on defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8080;

/// Directory name used under the platform config directory
const CONFIG_DIR_NAME: &str = "ring-api";

/// Compiled fallback values for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub audio_path: PathBuf,
    pub port: u16,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            audio_path: default_audio_path(),
            port: DEFAULT_PORT,
            log_level: default_log_level(),
        }
    }
}

/// Get OS-dependent default audio file path
fn default_audio_path() -> PathBuf {
    if cfg!(target_os = "windows") {
        PathBuf::from("C:\\").join("audio").join("ring.wav")
    } else {
        PathBuf::from("/var/lib/ring-api/ring.wav")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Bootstrap configuration loaded from TOML file
///
/// Every field is optional; absent values fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Audio file played on every ring
    #[serde(default)]
    pub audio_path: Option<PathBuf>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// File this configuration was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: TomlConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Locate and load the config file
    ///
    /// An explicitly requested file must exist. Otherwise the first existing
    /// entry of [`config_file_candidates`] is used, and `Ok(None)` means no
    /// file was found.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load(path).map(Some);
        }

        for candidate in config_file_candidates() {
            if candidate.exists() {
                debug!("Loading config file {}", candidate.display());
                return Self::load(&candidate).map(Some);
            }
        }

        debug!("No config file found, using defaults");
        Ok(None)
    }
}

/// Platform config file locations, most specific first
///
/// - Linux: `~/.config/ring-api/config.toml`, then `/etc/ring-api/config.toml`
/// - macOS: `~/Library/Application Support/ring-api/config.toml`
/// - Windows: `%APPDATA%\ring-api\config.toml`
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = dirs::config_dir()
        .map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"))
        .into_iter()
        .collect();

    if cfg!(target_os = "linux") {
        candidates.push(PathBuf::from("/etc").join(CONFIG_DIR_NAME).join("config.toml"));
    }

    candidates
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub audio_path: Option<PathBuf>,
    pub port: Option<u16>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub audio_path: PathBuf,
    pub port: u16,
    pub log_level: String,
}

impl ServiceConfig {
    /// Merge overrides, file values and compiled defaults
    pub fn resolve(overrides: &Overrides, file: Option<&TomlConfig>) -> Self {
        let defaults = CompiledDefaults::for_current_platform();

        let audio_path = overrides
            .audio_path
            .clone()
            .or_else(|| file.and_then(|f| f.audio_path.clone()))
            .unwrap_or(defaults.audio_path);

        let port = overrides
            .port
            .or_else(|| file.and_then(|f| f.port))
            .unwrap_or(defaults.port);

        let log_level = file
            .map(|f| f.logging.level.clone())
            .unwrap_or(defaults.log_level);

        Self {
            audio_path,
            port,
            log_level,
        }
    }
}
