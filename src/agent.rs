//! Placing the user's agent jar into an installation and starting the application

use crate::error::{AttachError, Result};
use crate::install::InstallRoot;
use crate::platform::{Layout, Platform};
use crate::utils::{CommandExecutor, PathResolver};
use std::fs;
use std::path::{Path, PathBuf};

pub const JAVAAGENT_PREFIX: &str = "-javaagent:";

/// Copy `agent` into the plugin directory, replacing an older copy.
pub fn deploy_agent(agent: &Path, root: &InstallRoot, layout: &Layout) -> Result<PathBuf> {
    if !agent.is_file() || !PathResolver::has_extension(agent, "jar") {
        return Err(AttachError::missing_artifact(agent.display().to_string()));
    }

    let plugins = root.plugins_dir(layout);
    if !plugins.is_dir() {
        return Err(AttachError::missing_artifact(plugins.display().to_string()));
    }

    let target = plugins.join(PathResolver::get_filename(agent)?);
    if target.exists() {
        crate::debug_println!("Replacing {}", target.display());
        fs::remove_file(&target)?;
    }
    fs::copy(agent, &target)
        .map_err(|e| AttachError::add_context(format!("Failed to copy {}", agent.display()), e))?;

    Ok(target)
}

/// Lines the launch config needs for `deployed`, agent first.
pub fn agent_flags(deployed: &Path, layout: &Layout, extra: &[String]) -> Vec<String> {
    let mut flags = vec![format!("{JAVAAGENT_PREFIX}{}", deployed.display())];
    if !layout.marker_flag.trim().is_empty() {
        flags.push(layout.marker_flag.trim().to_string());
    }
    flags.extend(extra.iter().map(|f| f.trim().to_string()));
    flags
}

/// Whether a launch config line loads the agent file named `jar_name`
pub fn is_agent_line(line: &str, jar_name: &str) -> bool {
    line.strip_prefix(JAVAAGENT_PREFIX).is_some_and(|rest| {
        // `-javaagent:<path>=<options>`
        let path = rest.split('=').next().unwrap_or(rest);
        Path::new(path)
            .file_name()
            .is_some_and(|n| n.to_string_lossy() == jar_name)
    })
}

/// Start the application without waiting for it.
pub fn launch_application(root: &InstallRoot, layout: &Layout) -> Result<u32> {
    match root.platform() {
        Platform::MacOs => {
            if !CommandExecutor::is_tool_installed("open") {
                return Err(AttachError::missing_tool("open"));
            }
            let bundle = root.path().display().to_string();
            let working_dir = root.path().parent().unwrap_or(root.path());
            CommandExecutor::spawn_detached(Path::new("open"), &[bundle.as_str()], working_dir)
        }
        Platform::Windows | Platform::Linux => {
            let launcher = layout.launcher.launcher_file().ok_or_else(|| {
                AttachError::invalid_layout(root.path().display().to_string(), "no launcher")
            })?;
            let program = root.path().join(launcher);
            if !program.is_file() {
                return Err(AttachError::missing_artifact(program.display().to_string()));
            }
            CommandExecutor::spawn_detached(&program, &[], root.path())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Profile;
    use tempfile::tempdir;

    fn linux_install(dir: &Path) -> (InstallRoot, Layout) {
        let layout = Layout::new(Platform::Linux, &Profile::default());
        fs::create_dir_all(dir.join("plugins")).unwrap();
        (InstallRoot::new(dir.to_path_buf(), Platform::Linux), layout)
    }

    #[test]
    fn test_deploy_replaces_existing() {
        let install = tempdir().unwrap();
        let work = tempdir().unwrap();
        let (root, layout) = linux_install(install.path());

        let agent = work.path().join("profiler-agent.jar");
        fs::write(&agent, b"new").unwrap();
        fs::write(install.path().join("plugins/profiler-agent.jar"), b"old").unwrap();

        let target = deploy_agent(&agent, &root, &layout).unwrap();
        assert_eq!(target, install.path().join("plugins/profiler-agent.jar"));
        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_deploy_requires_jar() {
        let install = tempdir().unwrap();
        let work = tempdir().unwrap();
        let (root, layout) = linux_install(install.path());

        let not_jar = work.path().join("agent.zip");
        fs::write(&not_jar, b"").unwrap();
        assert!(matches!(
            deploy_agent(&not_jar, &root, &layout),
            Err(AttachError::MissingArtifact { .. })
        ));
        assert!(matches!(
            deploy_agent(&work.path().join("absent.jar"), &root, &layout),
            Err(AttachError::MissingArtifact { .. })
        ));
    }

    #[test]
    fn test_deploy_requires_plugins_dir() {
        let install = tempdir().unwrap();
        let work = tempdir().unwrap();
        let layout = Layout::new(Platform::Linux, &Profile::default());
        let root = InstallRoot::new(install.path().to_path_buf(), Platform::Linux);
        let agent = work.path().join("agent.jar");
        fs::write(&agent, b"").unwrap();

        assert!(matches!(
            deploy_agent(&agent, &root, &layout),
            Err(AttachError::MissingArtifact { .. })
        ));
    }

    #[test]
    fn test_agent_flags_order() {
        let layout = Layout::new(Platform::Linux, &Profile::default());
        let flags = agent_flags(
            Path::new("/opt/dbeaver/plugins/agent.jar"),
            &layout,
            &[" -Dtrace.level=fine ".to_string()],
        );
        assert_eq!(
            flags,
            vec![
                "-javaagent:/opt/dbeaver/plugins/agent.jar".to_string(),
                "-Drcp.attach.agent=true".to_string(),
                "-Dtrace.level=fine".to_string(),
            ]
        );
    }

    #[test]
    fn test_is_agent_line() {
        assert!(is_agent_line("-javaagent:/opt/x/plugins/agent.jar", "agent.jar"));
        assert!(is_agent_line("-javaagent:/opt/x/plugins/agent.jar=verbose", "agent.jar"));
        assert!(!is_agent_line("-javaagent:/opt/x/plugins/other.jar", "agent.jar"));
        assert!(!is_agent_line("-Dagent.jar=1", "agent.jar"));
    }

    #[test]
    fn test_launch_missing_launcher() {
        let install = tempdir().unwrap();
        let (root, layout) = linux_install(install.path());
        assert!(matches!(
            launch_application(&root, &layout),
            Err(AttachError::MissingArtifact { .. })
        ));
    }
}
