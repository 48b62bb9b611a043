//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dish-decider/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::qr;
use crate::core::session::Session;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeciderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub group: GroupConfig,
    #[serde(default)]
    pub qr: QrConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub catalog_file: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GroupConfig {
    pub name: Option<String>,
    pub members: Option<Vec<String>>,
    pub radius: Option<f64>,
    /// Where distances on the results screen are measured from.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QrConfig {
    pub url_schemes: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_LOG_FILE: &str = "dish-decider.log";
/// Union Square, San Francisco (the sample catalog is nearby).
pub const DEFAULT_ORIGIN: (f64, f64) = (37.7880, -122.4075);

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` = built-in sample catalog.
    pub catalog_file: Option<PathBuf>,
    pub log_level: String,
    pub log_file: PathBuf,
    pub session: Session,
    /// (latitude, longitude)
    pub origin: (f64, f64),
    pub url_schemes: Vec<String>,
}

/// Overrides taken from the command line (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides<'a> {
    pub catalog: Option<&'a Path>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.dish-decider/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dish-decider").join("config.toml"))
}

/// Load config from the default location.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeciderConfig::default()`.
pub fn load_config() -> Result<DeciderConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(DeciderConfig::default())
        }
    }
}

/// Load config from an explicit path, generating a default file if absent.
pub fn load_config_from(path: &Path) -> Result<DeciderConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DeciderConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: DeciderConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Dish Decider Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog_file = "~/dishes.json"     # Or set DISH_DECIDER_CATALOG; omit for the sample dishes
# log_level = "debug"                # "error", "warn", "info", "debug", "trace"
# log_file = "dish-decider.log"

# [group]
# name = "Friday Night Dinner"
# members = ["You", "Alex", "Taylor", "Jordan"]
# radius = 5                         # miles, 1-25
# latitude = 37.7880                 # distances are measured from here
# longitude = -122.4075

# [qr]
# url_schemes = ["http", "https", "mailto", "tel"]
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
pub fn resolve(config: &DeciderConfig, cli: &CliOverrides<'_>) -> ResolvedConfig {
    // Catalog: CLI → env → config → sample
    let catalog_file = cli
        .catalog
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("DISH_DECIDER_CATALOG").ok().map(|p| expand_home(&p)))
        .or_else(|| config.general.catalog_file.as_deref().map(expand_home));

    // Log level: env → config → default
    let log_level = std::env::var("DISH_DECIDER_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(expand_home)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        catalog_file,
        log_level,
        log_file,
        session: resolve_session(&config.group),
        origin: (
            config.group.latitude.unwrap_or(DEFAULT_ORIGIN.0),
            config.group.longitude.unwrap_or(DEFAULT_ORIGIN.1),
        ),
        url_schemes: config
            .qr
            .url_schemes
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(qr::default_schemes),
    }
}

/// Start from the sample group and apply whatever the config sets.
fn resolve_session(group: &GroupConfig) -> Session {
    let mut session = Session::sample();
    if let Some(ref name) = group.name {
        session.name = name.clone();
    }
    if let Some(ref members) = group.members
        && !members.is_empty()
    {
        session.members = members.clone();
    }
    match group.radius {
        Some(radius) => session.with_radius(radius),
        None => session,
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
