use crate::agent::is_agent_line;
use crate::error::Result;
use crate::install::resolve_install_root;
use crate::launch_config::LaunchConfig;
use crate::platform::Layout;
use crate::steps::Progress;
use crate::ui::print_success;
use std::fs;

/// Handle detach command. `jar_name` is the agent file name as deployed.
pub fn handle_detach_command(raw_path: &str, layout: &Layout, jar_name: &str) -> Result<()> {
    let progress = Progress::new(3);

    let progress = progress.next("Resolving installation");
    let root = resolve_install_root(raw_path, layout)?;

    let progress = progress.next("Updating launch config");
    let config_path = root.launch_config(layout);
    let mut config = LaunchConfig::load(&config_path)?;
    let marker = layout.marker_flag.trim();
    let removed =
        config.remove_lines(|line| is_agent_line(line, jar_name) || (!marker.is_empty() && line == marker));

    if removed.is_empty() {
        crate::info_println!("  {} has no {jar_name} entry", layout.launch_config);
    } else {
        for line in &removed {
            crate::info_println!("  ➖ {line}");
        }
        config.save(&config_path)?;
    }

    let _ = progress.next("Removing agent jar");
    let deployed = root.plugins_dir(layout).join(jar_name);
    if deployed.is_file() {
        fs::remove_file(&deployed)?;
    } else {
        crate::warn_println!("{} not found, nothing to remove", deployed.display());
    }

    print_success("Agent detached", jar_name);
    Ok(())
}
