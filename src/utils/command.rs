use crate::error::{AttachError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Auxiliary checks never block longer than this
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared external process helpers
pub struct CommandExecutor;

impl CommandExecutor {
    /// Check if a tool is on PATH, giving up after a short timeout
    pub fn is_tool_installed(tool_name: &str) -> bool {
        let which = if cfg!(target_os = "windows") {
            "where"
        } else {
            "which"
        };

        let child = Command::new(which)
            .arg(tool_name)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = child else {
            return false;
        };

        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return status.success(),
                Ok(None) if started.elapsed() < CHECK_TIMEOUT => {
                    std::thread::sleep(Duration::from_millis(50));
                }
                _ => {
                    let _ = child.kill();
                    let _ = child.wait();
                    crate::debug_println!("Timed out looking up {tool_name}");
                    return false;
                }
            }
        }
    }

    /// Start a program and leave it running on its own
    pub fn spawn_detached(program: &Path, args: &[&str], working_dir: &Path) -> Result<u32> {
        crate::debug_println!(
            "Executing: {} {} (in {})",
            program.display(),
            args.join(" "),
            working_dir.display()
        );

        let child = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AttachError::tool_failure(program.display().to_string(), e.to_string()))?;

        Ok(child.id())
    }
}
