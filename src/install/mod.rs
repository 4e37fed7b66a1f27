//! Installation discovery: root resolution, product metadata and plugin inventory

pub mod metadata;
pub mod plugins;
pub mod resolver;

pub use metadata::{read_product_info, ProductInfo};
pub use plugins::{find_watched, scan_plugins};
pub use resolver::resolve_install_root;

use crate::platform::{Layout, Platform};
use std::path::{Path, PathBuf};

pub const PRODUCT_FILE: &str = ".eclipseproduct";
pub const PLUGINS_DIR: &str = "plugins";

/// Resolved base directory of an installation. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot {
    path: PathBuf,
    platform: Platform,
}

impl InstallRoot {
    pub fn new(path: PathBuf, platform: Platform) -> Self {
        Self { path, platform }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn product_dir(&self, layout: &Layout) -> PathBuf {
        self.path.join(&layout.product_offset)
    }

    pub fn product_file(&self, layout: &Layout) -> PathBuf {
        self.product_dir(layout).join(PRODUCT_FILE)
    }

    pub fn plugins_dir(&self, layout: &Layout) -> PathBuf {
        self.product_dir(layout).join(PLUGINS_DIR)
    }

    pub fn launch_config(&self, layout: &Layout) -> PathBuf {
        self.product_dir(layout).join(&layout.launch_config)
    }
}
