//! Line-oriented launch config (`<product>.ini`) editing.
//!
//! Lines are kept verbatim so an untouched file serializes back byte for byte.
//! Every flag sits on its own line; options that take a value (`-vm`) put the
//! value on the following line.

use crate::error::{AttachError, Result};
use crate::platform::Layout;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

const VM_FLAG: &str = "-vm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    lines: Vec<String>,
    trailing_newline: bool,
    crlf: bool,
}

/// What an edit changed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditReport {
    pub removed: Vec<String>,
    pub added: Vec<String>,
    pub sentinel_appended: bool,
}

impl EditReport {
    pub fn changed(&self) -> bool {
        self.sentinel_appended || !self.removed.is_empty() || !self.added.is_empty()
    }
}

impl LaunchConfig {
    pub fn parse(content: &str) -> Self {
        let crlf = content.contains("\r\n");
        let trailing_newline = content.is_empty() || content.ends_with('\n');
        let lines = content
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();

        Self {
            lines,
            trailing_newline,
            crlf,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AttachError::missing_artifact(path.display().to_string()));
        }
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    #[allow(dead_code)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.position(flag).is_some()
    }

    fn position(&self, flag: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.trim() == flag)
    }

    /// Remove every `flag` line together with the value line after it.
    pub fn strip_flag_pair(&mut self, flag: &str) -> Vec<String> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.lines.len());
        let mut lines = std::mem::take(&mut self.lines).into_iter();

        while let Some(line) = lines.next() {
            if line.trim() == flag {
                removed.push(line);
                if let Some(value) = lines.next() {
                    removed.push(value);
                }
            } else {
                kept.push(line);
            }
        }

        self.lines = kept;
        removed
    }

    /// Append `sentinel` when no line equals it. Returns whether it appended.
    pub fn ensure_sentinel(&mut self, sentinel: &str) -> bool {
        if self.contains(sentinel) {
            return false;
        }
        self.lines.push(sentinel.to_string());
        self.trailing_newline = true;
        true
    }

    /// Insert the missing `flags`, in order, right after `sentinel`.
    pub fn insert_after_sentinel(&mut self, sentinel: &str, flags: &[String]) -> Vec<String> {
        let Some(mut at) = self.position(sentinel).map(|i| i + 1) else {
            return Vec::new();
        };

        let mut added = Vec::new();
        for flag in flags {
            let flag = flag.trim();
            if flag.is_empty() || self.contains(flag) || added.iter().any(|a| a == flag) {
                continue;
            }
            self.lines.insert(at, flag.to_string());
            added.push(flag.to_string());
            at += 1;
        }
        added
    }

    pub fn remove_lines<F>(&mut self, mut pred: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        let (removed, kept): (Vec<String>, Vec<String>) =
            std::mem::take(&mut self.lines)
                .into_iter()
                .partition(|l| pred(l.trim()));
        self.lines = kept;
        removed
    }

    /// Layout-driven attach edit: drop the `-vm` pair where the layout asks,
    /// make sure the sentinel exists, then insert `flags` after it.
    pub fn apply_attach(&mut self, layout: &Layout, flags: &[String]) -> EditReport {
        let removed = if layout.strip_vm_override {
            self.strip_flag_pair(VM_FLAG)
        } else {
            Vec::new()
        };
        let sentinel_appended = self.ensure_sentinel(&layout.sentinel);
        let added = self.insert_after_sentinel(&layout.sentinel, flags);

        EditReport {
            removed,
            added,
            sentinel_appended,
        }
    }

    pub fn render(&self) -> String {
        let newline = if self.crlf { "\r\n" } else { "\n" };
        let mut out = self.lines.join(newline);
        if self.trailing_newline && !self.lines.is_empty() {
            out.push_str(newline);
        }
        out
    }

    /// Write to `path`, keeping a timestamped copy of the previous content.
    pub fn save(&self, path: &Path) -> Result<Option<PathBuf>> {
        let backup = if path.is_file() {
            let stamp = Local::now().format("%Y%m%d-%H%M%S");
            let name = format!(
                "{}.{stamp}.bak",
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default()
            );
            let backup = path.with_file_name(name);
            fs::copy(path, &backup)
                .map_err(|e| AttachError::add_context("Failed to back up launch config", e))?;
            crate::debug_println!("Backed up {} to {}", path.display(), backup.display());
            Some(backup)
        } else {
            None
        };

        fs::write(path, self.render())
            .map_err(|e| AttachError::add_context("Failed to write launch config", e))?;
        Ok(backup)
    }
}
