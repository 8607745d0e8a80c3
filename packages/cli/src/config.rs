use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tesseract_canvas::{CanvasOptions, Resolution};
use tesseract_common::DEFAULT_ID_PREFIX;

pub const DEFAULT_CONFIG_NAME: &str = "tesseract.config.json";

/// Tesseract configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// How a drop over a refusing element is resolved
    #[serde(default)]
    pub resolution: Resolution,

    /// Quiet period before the content editor autosaves
    #[serde(default = "default_autosave_ms")]
    pub autosave_ms: u64,

    /// Prefix for generated canvas element ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_autosave_ms() -> u64 {
    1000
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = Self::path_in(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn path_in(cwd: &Path) -> PathBuf {
        cwd.join(DEFAULT_CONFIG_NAME)
    }

    pub fn canvas_options(&self) -> CanvasOptions {
        CanvasOptions {
            resolution: self.resolution,
            id_prefix: self.id_prefix.clone(),
        }
    }

    pub fn autosave_period(&self) -> Duration {
        Duration::from_millis(self.autosave_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            autosave_ms: default_autosave_ms(),
            id_prefix: default_id_prefix(),
            log_level: default_log_level(),
        }
    }
}
