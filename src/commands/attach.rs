use crate::agent::{agent_flags, deploy_agent, launch_application};
use crate::error::Result;
use crate::install::{read_product_info, resolve_install_root};
use crate::launch_config::LaunchConfig;
use crate::platform::Layout;
use crate::steps::Progress;
use crate::ui::print_success;
use std::path::Path;

pub struct AttachOptions<'a> {
    pub agent: &'a Path,
    pub vm_args: &'a [String],
    pub launch: bool,
}

/// Handle attach command
pub fn handle_attach_command(raw_path: &str, layout: &Layout, opts: &AttachOptions) -> Result<()> {
    let total = if opts.launch { 5 } else { 4 };
    let progress = Progress::new(total);

    let progress = progress.next("Resolving installation");
    let root = resolve_install_root(raw_path, layout)?;
    crate::info_println!("  📂 {} ({})", root.path().display(), root.platform());

    let progress = progress.next("Reading product metadata");
    let product = read_product_info(&root, layout)?;
    crate::info_println!("  🏷️  {} {}", product.id, product.version);

    let progress = progress.next("Deploying agent");
    let deployed = deploy_agent(opts.agent, &root, layout)?;
    crate::info_println!("  📦 {}", deployed.display());

    let progress = progress.next("Updating launch config");
    let config_path = root.launch_config(layout);
    let mut config = LaunchConfig::load(&config_path)?;
    let report = config.apply_attach(layout, &agent_flags(&deployed, layout, opts.vm_args));

    if report.sentinel_appended {
        crate::warn_println!("No {} line found, appended one", layout.sentinel);
    }
    for line in &report.removed {
        crate::info_println!("  ➖ {line}");
    }
    for line in &report.added {
        crate::info_println!("  ➕ {line}");
    }
    if report.changed() {
        if let Some(backup) = config.save(&config_path)? {
            crate::debug_println!("Previous launch config kept at {}", backup.display());
        }
    } else {
        crate::info_println!("  {} already up to date", layout.launch_config);
    }

    if opts.launch {
        let _ = progress.next("Starting application");
        let pid = launch_application(&root, layout)?;
        crate::debug_println!("Started process {pid}");
    }

    print_success(
        "Agent attached",
        &format!("{} will load on next start", deployed.display()),
    );
    Ok(())
}
