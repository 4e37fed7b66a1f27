//! Per-platform installation layout, selected once at startup

use crate::config::Profile;
use crate::error::{AttachError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `.app` bundle with the product under `Contents/Eclipse`
    MacOs,
    /// Product root holding `<launcher>.exe`
    Windows,
    /// Product root holding a `<launcher>` binary, possibly version-suffixed
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Platform {
    type Err = AttachError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "macos" | "darwin" | "mac" => Ok(Platform::MacOs),
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(AttachError::config(format!("Unknown platform: {other}"))),
        }
    }
}

/// How a launcher file is recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherMatch {
    /// A directory named `<prefix>*.app`
    Bundle { prefix: String },
    /// Case-insensitive file name equality
    Exact { file_name: String },
    /// File name contains `needle`; a directory must hold a file named `needle`
    Contains { needle: String },
}

impl LauncherMatch {
    pub fn matches_file(&self, file_name: &str) -> bool {
        match self {
            LauncherMatch::Bundle { .. } => false,
            LauncherMatch::Exact { file_name: expected } => {
                file_name.eq_ignore_ascii_case(expected)
            }
            LauncherMatch::Contains { needle } => file_name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }

    /// File the installation directory must contain directly
    pub fn launcher_file(&self) -> Option<&str> {
        match self {
            LauncherMatch::Bundle { .. } => None,
            LauncherMatch::Exact { file_name } => Some(file_name),
            LauncherMatch::Contains { needle } => Some(needle),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub platform: Platform,
    /// Product directory relative to the installation root
    pub product_offset: PathBuf,
    pub launcher: LauncherMatch,
    pub launch_config: String,
    pub sentinel: String,
    /// Drop the `-vm <path>` pair so the system JVM is used
    pub strip_vm_override: bool,
    pub watched_plugins: Vec<String>,
    pub marker_flag: String,
}

impl Layout {
    pub fn new(platform: Platform, profile: &Profile) -> Self {
        let (product_offset, launcher) = match platform {
            Platform::MacOs => (
                PathBuf::from("Contents").join("Eclipse"),
                LauncherMatch::Bundle {
                    prefix: profile.bundle_prefix.clone(),
                },
            ),
            Platform::Windows => (
                PathBuf::new(),
                LauncherMatch::Exact {
                    file_name: format!("{}.exe", profile.launcher),
                },
            ),
            Platform::Linux => (
                PathBuf::new(),
                LauncherMatch::Contains {
                    needle: profile.launcher.clone(),
                },
            ),
        };

        Self {
            platform,
            product_offset,
            launcher,
            launch_config: profile.launch_config.clone(),
            sentinel: profile.sentinel.clone(),
            strip_vm_override: platform == Platform::MacOs,
            watched_plugins: profile.watched_plugins.clone(),
            marker_flag: profile.marker_flag.clone(),
        }
    }
}
