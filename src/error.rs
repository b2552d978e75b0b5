//! Error types for odps-console.

use thiserror::Error;

/// Main error type for console operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Command matched a grammar but broke a parameter rule
    #[error("Bad command: {reason}")]
    BadCommand { reason: String },

    /// Requested object does not exist in the resolved project
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    /// Input did not match any known command
    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    /// No project given and the session has no default
    #[error("No project specified and no default project is set")]
    ProjectNotSet,

    /// Error reported by the catalog service
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a bad-command error with a reason.
    pub fn bad_command(reason: impl Into<String>) -> Self {
        Error::BadCommand {
            reason: reason.into(),
        }
    }

    /// Whether this error was raised before the command reached the catalog.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::BadCommand { .. } | Error::UnrecognizedCommand(_) | Error::ProjectNotSet
        )
    }
}

/// Errors raised by a [`Catalog`](crate::catalog::Catalog) implementation.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Project does not exist
    #[error("Project not found: {project}")]
    ProjectNotFound { project: String },

    /// Online model does not exist
    #[error("Online model not found: {project}.{name}")]
    ModelNotFound { project: String, name: String },

    /// Catalog file could not be read
    #[error("Failed to load catalog {path}: {reason}")]
    Load { path: String, reason: String },

    /// Catalog file is not valid JSON
    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::bad_command("missing argument for option -p");
        assert_eq!(err.to_string(), "Bad command: missing argument for option -p");

        let err = Error::NotFound {
            kind: "Onlinemodel",
            name: "modelA".to_string(),
        };
        assert_eq!(err.to_string(), "Onlinemodel not found: modelA");

        let err = Error::from(CatalogError::ProjectNotFound {
            project: "proj1".to_string(),
        });
        assert_eq!(err.to_string(), "Catalog error: Project not found: proj1");
    }

    #[test]
    fn test_is_rejection() {
        assert!(Error::bad_command("x").is_rejection());
        assert!(Error::ProjectNotSet.is_rejection());
        assert!(Error::UnrecognizedCommand("show".to_string()).is_rejection());
        assert!(!Error::NotFound {
            kind: "Table",
            name: "t".to_string()
        }
        .is_rejection());
    }
}
