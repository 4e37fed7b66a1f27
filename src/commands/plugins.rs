use crate::error::Result;
use crate::install::{resolve_install_root, scan_plugins};
use crate::platform::Layout;

/// Handle plugins command
pub fn handle_plugins_command(raw_path: &str, layout: &Layout) -> Result<()> {
    let root = resolve_install_root(raw_path, layout)?;
    let dir = root.plugins_dir(layout);
    let archives = scan_plugins(&dir)?;

    crate::info_println!("📦 {} ({} archives)", dir.display(), archives.len());
    let width = archives.iter().map(|a| a.artifact.len()).max().unwrap_or(0);
    for archive in &archives {
        crate::info_println!(
            "  {:<width$}  {:<10}  {}",
            archive.artifact,
            archive.version,
            archive.file_name
        );
    }

    Ok(())
}
