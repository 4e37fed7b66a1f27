use crate::error::Result;
use crate::install::{find_watched, read_product_info, resolve_install_root, scan_plugins};
use crate::platform::Layout;
use crate::ui::print_install_info;

/// Handle inspect command
pub fn handle_inspect_command(raw_path: &str, layout: &Layout) -> Result<()> {
    let root = resolve_install_root(raw_path, layout)?;
    let product = read_product_info(&root, layout)?;

    print_install_info(&root, layout, &product);

    // Plugin details are informational; a missing directory only warns
    match scan_plugins(&root.plugins_dir(layout)) {
        Ok(archives) => {
            let watched = find_watched(&archives, &layout.watched_plugins);
            for archive in watched {
                crate::info_println!("  🧩 {} {}", archive.artifact, archive.version);
            }
        }
        Err(e) => crate::warn_println!("{e}"),
    }

    Ok(())
}
