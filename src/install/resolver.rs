use super::InstallRoot;
use crate::error::{AttachError, Result};
use crate::platform::{LauncherMatch, Layout, Platform};
use crate::utils::PathResolver;
use std::fs;
use std::path::{Path, PathBuf};

/// Find the installation root for a directory, launcher or bundle path.
pub fn resolve_install_root(raw: &str, layout: &Layout) -> Result<InstallRoot> {
    let cleaned = PathResolver::normalize_input(raw);
    let path = PathBuf::from(cleaned);

    if cleaned.is_empty() || !path.exists() {
        return Err(AttachError::path_not_found(cleaned));
    }

    let path = std::path::absolute(&path)?;
    crate::debug_println!("Resolving {} for {}", path.display(), layout.platform);

    let root = match (&layout.platform, &layout.launcher) {
        (Platform::MacOs, LauncherMatch::Bundle { prefix }) => find_bundle(&path, prefix)?,
        (_, launcher) => find_launcher_root(&path, launcher)?,
    };

    Ok(InstallRoot::new(root, layout.platform))
}

fn is_bundle(path: &Path) -> bool {
    path.is_dir()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("app"))
}

fn find_bundle(path: &Path, prefix: &str) -> Result<PathBuf> {
    if let Some(bundle) = path.ancestors().find(|p| is_bundle(p)) {
        return Ok(bundle.to_path_buf());
    }

    if path.is_dir() {
        let mut bundles: Vec<PathBuf> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| is_bundle(p))
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().starts_with(prefix))
                    .unwrap_or(false)
            })
            .collect();
        bundles.sort();

        if bundles.len() > 1 {
            crate::warn_println!(
                "Found {} {prefix}*.app bundles in {}, using {}",
                bundles.len(),
                path.display(),
                bundles[0].display()
            );
        }
        if let Some(bundle) = bundles.into_iter().next() {
            return Ok(bundle);
        }
    }

    Err(AttachError::invalid_layout(
        path.display().to_string(),
        format!("no {prefix}*.app bundle found"),
    ))
}

fn find_launcher_root(path: &Path, launcher: &LauncherMatch) -> Result<PathBuf> {
    let expected = launcher.launcher_file().unwrap_or_default();

    if path.is_file() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if !launcher.matches_file(&name) {
            return Err(AttachError::invalid_layout(
                path.display().to_string(),
                format!("'{name}' is not the {expected} launcher"),
            ));
        }
        return path.parent().map(Path::to_path_buf).ok_or_else(|| {
            AttachError::invalid_layout(path.display().to_string(), "launcher has no parent")
        });
    }

    if path.is_dir() {
        if contains_launcher(path, launcher) {
            return Ok(path.to_path_buf());
        }
        return Err(AttachError::invalid_layout(
            path.display().to_string(),
            format!("directory does not contain {expected}"),
        ));
    }

    Err(AttachError::invalid_layout(
        path.display().to_string(),
        "neither a file nor a directory",
    ))
}

fn contains_launcher(dir: &Path, launcher: &LauncherMatch) -> bool {
    let Some(expected) = launcher.launcher_file() else {
        return false;
    };

    // Exact names compare case-insensitively, as the launcher file check does
    match launcher {
        LauncherMatch::Exact { .. } => fs::read_dir(dir)
            .map(|entries| {
                entries.filter_map(|e| e.ok()).any(|e| {
                    e.path().is_file() && e.file_name().to_string_lossy().eq_ignore_ascii_case(expected)
                })
            })
            .unwrap_or(false),
        _ => dir.join(expected).is_file(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;
    use tempfile::tempdir;

    fn layout(platform: Platform) -> Layout {
        Layout::new(platform, &Profile::default())
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_nonexistent_path_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        for platform in [Platform::MacOs, Platform::Windows, Platform::Linux] {
            let result = resolve_install_root(&missing.to_string_lossy(), &layout(platform));
            assert!(matches!(result, Err(AttachError::PathNotFound { .. })));
        }
        assert!(!missing.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_quotes_and_whitespace_trimmed() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("dbeaver"));

        let raw = format!("  \"{}\"\n", dir.path().display());
        let root = resolve_install_root(&raw, &layout(Platform::Linux)).unwrap();
        assert_eq!(root.path(), dir.path());

        let raw = format!("'{}'", dir.path().display());
        let root = resolve_install_root(&raw, &layout(Platform::Linux)).unwrap();
        assert_eq!(root.path(), dir.path());
    }

    #[test]
    fn test_windows_dir_and_exe_agree() {
        let dir = tempdir().unwrap();
        let exe = dir.path().join("dbeaver.exe");
        touch(&exe);
        let layout = layout(Platform::Windows);

        let from_dir = resolve_install_root(&dir.path().to_string_lossy(), &layout).unwrap();
        let from_exe = resolve_install_root(&exe.to_string_lossy(), &layout).unwrap();
        assert_eq!(from_dir, from_exe);
        assert_eq!(from_dir.path(), dir.path());
    }

    #[test]
    fn test_windows_exe_name_case_insensitive() {
        let dir = tempdir().unwrap();
        let exe = dir.path().join("DBeaver.EXE");
        touch(&exe);
        let layout = layout(Platform::Windows);

        let root = resolve_install_root(&exe.to_string_lossy(), &layout).unwrap();
        assert_eq!(root.path(), dir.path());
        assert!(resolve_install_root(&dir.path().to_string_lossy(), &layout).is_ok());
    }

    #[test]
    fn test_windows_wrong_file_rejected() {
        let dir = tempdir().unwrap();
        let other = dir.path().join("dbeaver-cli.exe");
        touch(&other);

        let err = resolve_install_root(&other.to_string_lossy(), &layout(Platform::Windows))
            .unwrap_err();
        match err {
            AttachError::InvalidLayout { path, .. } => assert!(path.ends_with("dbeaver-cli.exe")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_linux_dir_and_suffixed_launcher_agree() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("dbeaver"));
        let suffixed = dir.path().join("dbeaver-ce-25.2.0");
        touch(&suffixed);
        let layout = layout(Platform::Linux);

        let from_dir = resolve_install_root(&dir.path().to_string_lossy(), &layout).unwrap();
        let from_exe = resolve_install_root(&suffixed.to_string_lossy(), &layout).unwrap();
        assert_eq!(from_dir, from_exe);
    }

    #[test]
    fn test_linux_dir_without_launcher() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("readme.txt"));

        let err = resolve_install_root(&dir.path().to_string_lossy(), &layout(Platform::Linux))
            .unwrap_err();
        assert!(matches!(err, AttachError::InvalidLayout { .. }));
    }

    #[test]
    fn test_macos_bundle_forms_agree() {
        let dir = tempdir().unwrap();
        let bundle = dir.path().join("DBeaver.app");
        let inner = bundle.join("Contents").join("MacOS").join("dbeaver");
        touch(&inner);
        let layout = layout(Platform::MacOs);

        let direct = resolve_install_root(&bundle.to_string_lossy(), &layout).unwrap();
        let nested = resolve_install_root(&inner.to_string_lossy(), &layout).unwrap();
        let parent = resolve_install_root(&dir.path().to_string_lossy(), &layout).unwrap();

        assert_eq!(direct.path(), bundle.as_path());
        assert_eq!(direct, nested);
        assert_eq!(direct, parent);
    }

    #[test]
    fn test_macos_picks_first_bundle_by_name() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("DBeaverUltimate.app")).unwrap();
        fs::create_dir_all(dir.path().join("DBeaver.app")).unwrap();
        fs::create_dir_all(dir.path().join("Other.app")).unwrap();

        let root =
            resolve_install_root(&dir.path().to_string_lossy(), &layout(Platform::MacOs)).unwrap();
        assert_eq!(root.path(), dir.path().join("DBeaver.app").as_path());
    }

    #[test]
    fn test_macos_plain_dir_without_bundle() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Other.app")).unwrap();

        let err = resolve_install_root(&dir.path().to_string_lossy(), &layout(Platform::MacOs))
            .unwrap_err();
        assert!(matches!(err, AttachError::InvalidLayout { .. }));
    }
}
