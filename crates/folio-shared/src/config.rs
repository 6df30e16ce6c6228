//! Configuration for folioctl.
//!
//! Loads settings from a TOML file or uses defaults. Lookup order:
//! `--config`, then `$FOLIO_CONFIG`, then `<config dir>/folio/config.toml`.
//! A missing file is not an error; a malformed one is.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::Result;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Contact form settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Simulated send time in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    600
}

impl ContactConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

/// Optional replacements for the built-in profile handles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOverrides {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_color")]
    pub color: bool,

    /// Wrap width for long paragraphs
    #[serde(default = "default_width")]
    pub width: usize,
}

fn default_color() -> bool {
    true
}

fn default_width() -> usize {
    80
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            width: default_width(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub profile: ProfileOverrides,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl FolioConfig {
    /// Load config using the standard lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV).ok();
        match resolve_path(explicit, env_path.as_deref()) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No config location available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific path; a missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Config not found at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config: FolioConfig = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Pick the config file path: explicit flag, then env value, then the
/// platform config directory.
pub fn resolve_path(explicit: Option<&Path>, env_value: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}
