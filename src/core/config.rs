//! # Configuration
//!
//! Editor settings, layered lowest to highest:
//! built-in defaults, `~/.tilepaint/config.toml`, `TILEPAINT_*` env vars,
//! then `--cell-width`.
//!
//! The first run writes a fully commented config file listing every key.
//!
//! Loading happens before the file logger exists (the log level and log
//! path are settings themselves), so nothing here logs. Problems are
//! collected as warnings on the config and reported by the binary once
//! logging is up.

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TilepaintConfig {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Non-fatal problems met while loading.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub default_map_name: Option<String>,
    pub extension: Option<String>,
    pub cell_width: Option<u16>,
    pub save_on_quit: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MAP_NAME: &str = "map";
pub const DEFAULT_EXTENSION: &str = "ber";
pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const MAX_CELL_WIDTH: u16 = 8;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "tilepaint.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_map_name: String,
    pub extension: String,
    /// Terminal columns per tile.
    pub cell_width: u16,
    pub save_on_quit: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Loader warnings plus any setting that was rejected during resolution.
    pub warnings: Vec<String>,
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

// ============================================================================
// Loading
// ============================================================================

/// `~/.tilepaint/config.toml`, or `None` without a home directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tilepaint").join("config.toml"))
}

/// Read the user's config file.
///
/// A missing file is not an error: a commented template is written in its
/// place and the defaults apply. Only an unreadable or unparsable existing
/// file fails.
pub fn load_config() -> Result<TilepaintConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(TilepaintConfig {
            warnings: vec!["no home directory; using built-in settings".to_string()],
            ..Default::default()
        });
    };

    if !path.exists() {
        let mut config = TilepaintConfig::default();
        if let Err(e) = write_template(&path) {
            config
                .warnings
                .push(format!("could not write {}: {e}", path.display()));
        }
        return Ok(config);
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

const CONFIG_TEMPLATE: &str = r#"# Tilepaint settings. Every key is optional.
# Precedence: built-in default < this file < TILEPAINT_* env vars < command-line flags.

# [editor]
# default_map_name = "map"     # used when only width and height are given
# extension = "ber"
# cell_width = 2               # terminal columns per tile, or TILEPAINT_CELL_WIDTH / --cell-width
# save_on_quit = false         # write unsaved changes when quitting

# [logging]
# level = "info"               # "off", "error", "warn", "info", "debug", "trace", or TILEPAINT_LOG_LEVEL
# file = "tilepaint.log"
"#;

fn write_template(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse the layers into concrete values.
///
/// `cli_cell_width` is `--cell-width` when given. An unparsable log level
/// falls back to the default and is recorded in `warnings`.
pub fn resolve(config: &TilepaintConfig, cli_cell_width: Option<u16>) -> ResolvedConfig {
    let mut warnings = config.warnings.clone();

    let cell_width = cli_cell_width
        .or_else(|| {
            std::env::var("TILEPAINT_CELL_WIDTH")
                .ok()
                .and_then(|v| v.trim().parse().ok())
        })
        .or(config.editor.cell_width)
        .unwrap_or(DEFAULT_CELL_WIDTH)
        .clamp(1, MAX_CELL_WIDTH);

    let log_level = match std::env::var("TILEPAINT_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
    {
        Some(level) => parse_level(&level).unwrap_or_else(|| {
            warnings.push(format!(
                "unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Stored without the leading dot
    let extension = config
        .editor
        .extension
        .as_deref()
        .map(|ext| ext.trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION)
        .to_string();

    ResolvedConfig {
        default_map_name: config
            .editor
            .default_map_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_MAP_NAME.to_string()),
        extension,
        cell_width,
        save_on_quit: config.editor.save_on_quit.unwrap_or(false),
        log_level,
        log_file: PathBuf::from(
            config
                .logging
                .file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        warnings,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
