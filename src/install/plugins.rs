use crate::error::{AttachError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// `<artifact>_<qualified version>.jar`; the version must start with a digit.
static ARCHIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<artifact>[A-Za-z0-9_.\-]+?)_(?P<version>[0-9][0-9A-Za-z_.\-]*)\.jar$")
        .expect("valid archive regex")
});

static SHORT_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.\d+\.\d+)").expect("valid version regex"));

/// A versioned plugin archive such as `org.example.core_3.0.9.202506090822.jar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginArchive {
    pub artifact: String,
    /// Full version including the build qualifier
    pub qualified_version: String,
    /// Leading `major.minor.patch`, or the qualified version if it has none
    pub version: String,
    pub file_name: String,
}

pub fn parse_archive_name(file_name: &str) -> Option<PluginArchive> {
    let caps = ARCHIVE_RE.captures(file_name)?;
    let artifact = caps.name("artifact")?.as_str().to_string();
    let qualified_version = caps.name("version")?.as_str().to_string();
    let version = SHORT_VERSION_RE
        .captures(&qualified_version)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| qualified_version.clone());

    Some(PluginArchive {
        artifact,
        qualified_version,
        version,
        file_name: file_name.to_string(),
    })
}

/// Versioned archives directly inside `dir`, sorted by artifact then version.
pub fn scan_plugins(dir: &Path) -> Result<Vec<PluginArchive>> {
    if !dir.is_dir() {
        return Err(AttachError::missing_artifact(dir.display().to_string()));
    }

    let mut archives: Vec<PluginArchive> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| parse_archive_name(&entry.file_name().to_string_lossy()))
        .collect();

    archives.sort_by(|a, b| {
        a.artifact
            .cmp(&b.artifact)
            .then_with(|| a.qualified_version.cmp(&b.qualified_version))
    });
    crate::debug_println!("Found {} plugin archives in {}", archives.len(), dir.display());
    Ok(archives)
}

/// Look up each watched artifact. Missing ones are reported and skipped.
pub fn find_watched<'a>(
    archives: &'a [PluginArchive],
    watched: &[String],
) -> Vec<&'a PluginArchive> {
    let mut found = Vec::new();
    for artifact in watched {
        // Several builds may sit side by side; the last one sorts newest
        match archives.iter().rev().find(|a| &a.artifact == artifact) {
            Some(archive) => found.push(archive),
            None => crate::warn_println!("Plugin {artifact} not found, skipping"),
        }
    }
    found
}
