//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.trapezio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::LogLevel;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TrapezioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub divide: DivideConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Initial value of the root counter screen.
    pub initial_value: Option<i64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DivideConfig {
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<LogLevel>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INITIAL_VALUE: i64 = 0;
pub const DEFAULT_DIVIDE_DELAY_MS: u64 = 100;
pub const DEFAULT_LOG_FILE: &str = "trapezio.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub initial_value: i64,
    pub divide_delay_ms: u64,
    pub log_file: PathBuf,
    pub log_level: LogLevel,
}

/// Values supplied on the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub initial_value: Option<i64>,
    pub log_level: Option<LogLevel>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.trapezio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".trapezio").join("config.toml"))
}

/// Load config from `~/.trapezio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TrapezioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TrapezioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TrapezioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TrapezioConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a specific config file.
pub fn load_config_from(path: &Path) -> Result<TrapezioConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: TrapezioConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Trapezio Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_value = 0          # Or set TRAPEZIO_INITIAL_VALUE

# [divide]
# delay_ms = 100             # Or set TRAPEZIO_DIVIDE_DELAY_MS

# [logging]
# file = "trapezio.log"      # Or set TRAPEZIO_LOG_FILE
# level = "debug"            # "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TrapezioConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &TrapezioConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Initial value: CLI → env → config → default
    let initial_value = cli
        .initial_value
        .or_else(|| parse_env(&env, "TRAPEZIO_INITIAL_VALUE"))
        .or(config.general.initial_value)
        .unwrap_or(DEFAULT_INITIAL_VALUE);

    // Divide delay: env → config → default
    let divide_delay_ms = parse_env(&env, "TRAPEZIO_DIVIDE_DELAY_MS")
        .or(config.divide.delay_ms)
        .unwrap_or(DEFAULT_DIVIDE_DELAY_MS);

    // Log file: env → config → default
    let log_file = env("TRAPEZIO_LOG_FILE")
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| parse_env(&env, "TRAPEZIO_LOG_LEVEL"))
        .or(config.logging.level)
        .unwrap_or_default();

    ResolvedConfig {
        initial_value,
        divide_delay_ms,
        log_file: PathBuf::from(log_file),
        log_level,
    }
}

fn parse_env<T: FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
