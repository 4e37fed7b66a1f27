use thiserror::Error;

/// The main error type for rcp-attach operations
#[derive(Error, Debug)]
pub enum AttachError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user supplied path does not exist
    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    /// The path exists but does not look like an installation
    #[error("Invalid installation layout at {path}: {reason}")]
    InvalidLayout { path: String, reason: String },

    /// A required key is absent from the product metadata file
    #[error("Missing '{field}' in product metadata: {path}")]
    MissingMetadataField { field: String, path: String },

    /// An external program is not available on PATH
    #[error("Required tool not found: {tool}")]
    MissingExternalTool { tool: String },

    /// An external program could not be run or reported failure
    #[error("Failed to execute {tool}: {reason}")]
    ExternalToolFailure { tool: String, reason: String },

    /// A file or directory the operation depends on is missing
    #[error("Missing artifact: {path}")]
    MissingArtifact { path: String },

    /// Profile could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for rcp-attach operations
pub type Result<T> = std::result::Result<T, AttachError>;

impl AttachError {
    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    pub fn invalid_layout(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MissingMetadataField {
            field: field.into(),
            path: path.into(),
        }
    }

    pub fn missing_tool(tool: impl Into<String>) -> Self {
        Self::MissingExternalTool { tool: tool.into() }
    }

    pub fn tool_failure(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ExternalToolFailure {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_artifact(path: impl Into<String>) -> Self {
        Self::MissingArtifact { path: path.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn add_context<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Get suggested actions for the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            AttachError::PathNotFound { .. } => {
                vec!["Check the installation path and try again".to_string()]
            }
            AttachError::InvalidLayout { .. } => vec![
                "Pass the installation directory, the launcher executable or the .app bundle"
                    .to_string(),
                "Use --profile if the launcher is not named like the default profile".to_string(),
            ],
            AttachError::MissingExternalTool { tool } => {
                vec![format!("Install {tool} or make sure it is on PATH")]
            }
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_layout_error_carries_path() {
        let err = AttachError::invalid_layout("/opt/nothing", "launcher not found");
        assert_eq!(
            err.to_string(),
            "Invalid installation layout at /opt/nothing: launcher not found"
        );
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn test_context_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AttachError::add_context("Failed to write launch config", io);
        assert!(err.to_string().starts_with("Failed to write launch config"));
        assert!(err.source().is_some());
    }
}
