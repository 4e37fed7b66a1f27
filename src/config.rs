//! Product profile: the names that differ between Eclipse RCP products

use crate::error::{AttachError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "RCP_ATTACH_CONFIG_PATH";
const CONFIG_FILE: &str = "profile.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Launcher executable name without extension
    pub launcher: String,
    /// Prefix of the `.app` bundle name on macOS
    pub bundle_prefix: String,
    /// Launch config file name inside the product directory
    pub launch_config: String,
    /// Line after which JVM flags must be placed
    pub sentinel: String,
    /// Plugin artifacts reported by `inspect`
    pub watched_plugins: Vec<String>,
    /// Extra line written next to the agent so detach can find it
    pub marker_flag: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            launcher: "dbeaver".to_string(),
            bundle_prefix: "DBeaver".to_string(),
            launch_config: "dbeaver.ini".to_string(),
            sentinel: "-vmargs".to_string(),
            watched_plugins: vec![
                "org.jkiss.dbeaver.core".to_string(),
                "org.jkiss.utils".to_string(),
            ],
            marker_flag: "-Drcp.attach.agent=true".to_string(),
        }
    }
}

impl Profile {
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(dir).join(CONFIG_FILE));
        }

        let home_dir = dirs::home_dir()
            .ok_or_else(|| AttachError::config("Could not determine home directory"))?;

        Ok(home_dir.join(".rcp-attach").join(CONFIG_FILE))
    }

    /// Explicit file first, then the user config, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(AttachError::config(format!(
                    "Profile not found: {}",
                    path.display()
                )));
            }
            return Self::load_from(path);
        }

        let path = Self::config_path()?;
        if path.is_file() {
            crate::debug_println!("Loading profile from {}", path.display());
            Self::load_from(&path)
        } else {
            crate::debug_println!("No profile at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let profile: Profile = toml::from_str(&content).map_err(|e| {
            AttachError::config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<()> {
        if self.launcher.trim().is_empty() {
            return Err(AttachError::config("'launcher' must not be empty"));
        }
        if self.sentinel.trim().is_empty() {
            return Err(AttachError::config("'sentinel' must not be empty"));
        }
        if self.launch_config.trim().is_empty() {
            return Err(AttachError::config("'launch_config' must not be empty"));
        }
        Ok(())
    }
}
