use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mbg.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file \"{}\" not found", .0.display())]
    NotFound(PathBuf),
    #[error("io error reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid delimiter \"{0}\"; expected a single ASCII character")]
    InvalidDelimiter(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub defaults: Defaults,
    pub logging: LoggingConfig,
}

/// Fallbacks for `masak` flags that were not given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub porsi: u64,
    pub format: String,
    pub pretty: bool,
    pub delimiter: String,
    pub header: bool,
    pub batch_size: Option<usize>,
    pub recipes_dir: PathBuf,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            porsi: 100,
            format: "json".to_string(),
            pretty: true,
            delimiter: ",".to_string(),
            header: true,
            batch_size: None,
            recipes_dir: PathBuf::from("recipes"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `mbg_generate=debug`.
    pub level: Option<String>,
    /// Append JSON logs to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

/// Load `explicit` if given (it must exist), else `mbg.toml` from the working
/// directory when present, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<CliConfig, ConfigError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(CliConfig::default());
            }
            path
        }
    };
    let content = std::fs::read_to_string(&path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<CliConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Single-byte CSV delimiter. `\t` and `tab` select a tab.
pub fn parse_delimiter(raw: &str) -> Result<u8, ConfigError> {
    if raw == "\\t" || raw.eq_ignore_ascii_case("tab") {
        return Ok(b'\t');
    }
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(ConfigError::InvalidDelimiter(raw.to_string())),
    }
}
