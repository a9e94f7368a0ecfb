//! Configuration file handling for asciicam.
//!
//! Loads configuration from `<config dir>/asciicam/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AsciiConfig {
    /// Built-in ramp name: classic, standard, blocks, minimal
    #[serde(default)]
    pub charset: Option<String>,
    /// Custom ramp, sparsest glyph first. Takes precedence over `charset`.
    #[serde(default)]
    pub ramp: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    #[serde(default)]
    pub device: u32,
    /// Requested capture resolution, `WIDTHxHEIGHT`
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default)]
    pub mirror: bool,
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is tried and a missing file yields the default config.
    /// A file that exists but cannot be parsed is always an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    log::debug!("no config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    AlreadyExists(PathBuf),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::AlreadyExists(path) => {
                write!(
                    f,
                    "Config file already exists: {}. Use 'asciicam config show' to view current settings",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::AlreadyExists(_) => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciicam").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciicam/config.toml")
        })
}

/// Write the commented default config to `path`, creating parent directories.
///
/// Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let io_error = |source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
    log::info!("wrote default config to {}", path.display());
    Ok(())
}

/// Commented default config written by `asciicam config init`.
pub const DEFAULT_CONFIG: &str = r#"# asciicam configuration

[ascii]
# Density ramp: classic, standard, blocks, minimal
charset = "classic"
# Custom ramp, sparsest glyph first (overrides charset)
# ramp = " .:-=+*#%@"
# Invert brightness (for light terminals)
invert = false

[camera]
# Camera device index (see `asciicam list-cameras`)
device = 0
# Requested capture resolution
resolution = "600x400"
# Requested frame rate
fps = 30
# Mirror horizontally (selfie mode)
mirror = false
"#;
