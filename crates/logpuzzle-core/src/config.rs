use crate::order::SortMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per image (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 10,
        }
    }
}

/// Global configuration loaded from `~/.config/logpuzzle/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogpuzzleConfig {
    /// Scheme prepended to the host derived from the log file name.
    pub scheme: String,
    /// Ordering applied to extracted URLs unless overridden on the command line.
    #[serde(default)]
    pub sort_mode: SortMode,
    /// Connect timeout per image fetch, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout per image fetch, in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects followed per fetch.
    pub max_redirects: u32,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for LogpuzzleConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            sort_mode: SortMode::Auto,
            connect_timeout_secs: 30,
            timeout_secs: 300,
            max_redirects: 10,
            retry: None,
        }
    }
}

impl LogpuzzleConfig {
    /// Retry settings in effect: the `[retry]` section or its defaults.
    pub fn retry_config(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("logpuzzle")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LogpuzzleConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LogpuzzleConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LogpuzzleConfig = toml::from_str(&data)?;
    Ok(cfg)
}
