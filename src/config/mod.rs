use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_output_dir() -> String {
    "output".to_string()
}
fn default_timezone() -> String {
    "America/New_York".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            timezone: default_timezone(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("legcal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".legcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("legcal.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An existing but unparsable file is a fatal configuration error.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Self::default())
        }
    }
}
