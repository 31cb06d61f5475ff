use serde::{Deserialize, Serialize};
use tokio::time::Duration;

use crate::utils::constants::{DEFAULT_DATE_FORMAT, DEFAULT_REFRESH_INTERVAL_MS};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Millisecond delta between this machine's clock and the server clock
    /// that produced the timestamps being displayed.
    #[serde(default)]
    pub time_offset_ms: i64,

    /// strftime pattern used by the absolute date display.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Period of the elapsed-time refresh timer.
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_refresh_interval_ms() -> u64 {
    DEFAULT_REFRESH_INTERVAL_MS
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            time_offset_ms: 0,
            date_format: default_date_format(),
            refresh_interval_ms: default_refresh_interval_ms(),
        }
    }
}

impl ConsoleConfig {
    /// Falls back to the default pattern when the configured one is blank.
    pub fn date_format(&self) -> &str {
        if self.date_format.trim().is_empty() {
            DEFAULT_DATE_FORMAT
        } else {
            &self.date_format
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

pub async fn load_config<P: AsRef<std::path::Path>>(path: P) -> crate::Result<ConsoleConfig> {
    let path = dirs::home_dir()
        .ok_or_else(|| crate::error!("Home directory not found"))?
        .join(".timesince")
        .join(path);
    let config_str =
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| crate::TimesinceError::ConfigError {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
    Ok(toml::from_str(&config_str)?)
}

pub async fn save_config<P: AsRef<std::path::Path>>(
    path: P,
    config: &ConsoleConfig,
) -> crate::Result<()> {
    let path = dirs::home_dir()
        .ok_or_else(|| crate::error!("Home directory not found"))?
        .join(".timesince")
        .join(path);

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| crate::TimesinceError::ConfigError {
                path: parent.to_path_buf(),
                source: Box::new(e),
            })?;
    }

    let config_str = toml::to_string(config)?;
    tokio::fs::write(&path, config_str)
        .await
        .map_err(|e| crate::TimesinceError::ConfigError {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    Ok(())
}
