use crate::error::{AttachError, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Utility for turning user input into paths consistently across commands
pub struct PathResolver;

impl PathResolver {
    /// Resolve input path from positional argument or flag
    pub fn resolve_input_path(positional: Option<String>, flag: Option<String>) -> Option<String> {
        positional.or(flag)
    }

    /// Strip surrounding whitespace and one layer of quotes, as pasted from a file manager
    pub fn normalize_input(raw: &str) -> &str {
        raw.trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .trim()
    }

    /// Ask for the installation path on stdin
    pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
        write!(output, "📂 Installation path: ")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        let path = Self::normalize_input(&line);
        if path.is_empty() {
            return Err(AttachError::path_not_found("<empty>"));
        }
        Ok(path.to_string())
    }

    /// Use the argument when given, otherwise prompt
    pub fn path_or_prompt(path: Option<String>) -> Result<String> {
        match path {
            Some(path) => Ok(path),
            None => {
                let stdin = io::stdin();
                Self::prompt_for_path(&mut stdin.lock(), &mut io::stdout())
            }
        }
    }

    /// Check if file has the expected extension
    pub fn has_extension(path: &Path, expected_ext: &str) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(expected_ext))
    }

    /// Get filename from path
    pub fn get_filename(path: &Path) -> Result<String> {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AttachError::missing_artifact(path.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_resolve_input_path() {
        assert_eq!(
            PathResolver::resolve_input_path(Some("a".to_string()), Some("b".to_string())),
            Some("a".to_string())
        );
        assert_eq!(
            PathResolver::resolve_input_path(None, Some("b".to_string())),
            Some("b".to_string())
        );
        assert_eq!(PathResolver::resolve_input_path(None, None), None);
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(PathResolver::normalize_input("  /opt/app \n"), "/opt/app");
        assert_eq!(
            PathResolver::normalize_input("\"C:\\Program Files\\DBeaver\""),
            "C:\\Program Files\\DBeaver"
        );
        assert_eq!(PathResolver::normalize_input("'/Applications/DBeaver.app'"), "/Applications/DBeaver.app");
        assert_eq!(PathResolver::normalize_input(" \" \" "), "");
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut input = Cursor::new(b"'/opt/dbeaver'\n".to_vec());
        let mut output = Vec::new();

        let path = PathResolver::prompt_for_path(&mut input, &mut output).unwrap();
        assert_eq!(path, "/opt/dbeaver");
        assert!(String::from_utf8(output).unwrap().contains("Installation path"));
    }

    #[test]
    fn test_prompt_empty_input() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        assert!(matches!(
            PathResolver::prompt_for_path(&mut input, &mut output),
            Err(AttachError::PathNotFound { .. })
        ));
    }

    #[test]
    fn test_has_extension() {
        assert!(PathResolver::has_extension(Path::new("agent.jar"), "jar"));
        assert!(PathResolver::has_extension(Path::new("agent.JAR"), "jar"));
        assert!(!PathResolver::has_extension(Path::new("agent.zip"), "jar"));
        assert!(!PathResolver::has_extension(Path::new("agent"), "jar"));
    }
}
