//! Configuration models and loaders for the suvat calculator.
//!
//! Every section and field has a default, so an empty file (or no file at all)
//! yields [`Config::default`].

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Digits beyond this add nothing to an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Top-level settings shared by the command-line front ends.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub check: CheckConfig,
    pub logging: LoggingConfig,
}

/// How resolved values are written back into text fields.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Fixed number of decimals; shortest round-trip form when absent.
    pub precision: Option<usize>,
}

/// Post-solve consistency check against all five equations.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    pub tolerance: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig { tolerance: 1e-9 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` level name: trace, debug, info, warn, error, or off.
    pub level: String,
}

impl LoggingConfig {
    /// The configured level as a filter.
    pub fn filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level.parse().map_err(|_| {
            ConfigError::Invalid(format!("logging.level '{}' is not a known level", self.level))
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format '{0}' (expected .yaml, .yml, or .toml)")]
    UnsupportedFormat(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Load a configuration file, choosing the parser by extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let config: Config = match extension.as_str() {
        "toml" => {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        }
        "yaml" | "yml" => {
            let reader = File::open(path)?;
            // An empty YAML document deserializes as unit, not as an empty map.
            if reader.metadata()?.len() == 0 {
                Config::default()
            } else {
                serde_yaml::from_reader(reader)?
            }
        }
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };
    config.validate()?;
    Ok(config)
}

/// Load `path` if given, otherwise fall back to defaults.
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load(path),
        None => Ok(Config::default()),
    }
}

impl Config {
    /// Reject values the front ends cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(precision) = self.display.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::Invalid(format!(
                    "display.precision must be at most {MAX_PRECISION}, got {precision}"
                )));
            }
        }
        let tolerance = self.check.tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "check.tolerance must be a positive number, got {tolerance}"
            )));
        }
        self.logging.filter()?;
        Ok(())
    }
}
