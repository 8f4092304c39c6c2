//! Error types shared across the scaffolding pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a typed answer; the question is asked again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("Project name cannot contain control characters or any of: < > : \" / \\ | ? *")]
    InvalidCharacters,

    #[error("\"{0}\" is not a usable directory name")]
    Reserved(String),

    #[error("A file or directory named \"{0}\" already exists here")]
    AlreadyExists(String),

    #[error("Package name may only contain lowercase letters, digits, @ . _ and -")]
    InvalidPackageName,
}

/// Failure to collect an answer from the terminal
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompts cannot be rendered in this terminal (an interactive TTY is required)")]
    Unsupported(#[source] Option<io::Error>),

    #[error("prompt interrupted")]
    Interrupted,

    #[error("no answer matches \"{0}\"")]
    UnknownChoice(String),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted => PromptError::Interrupted,
            _ => PromptError::Unsupported(Some(err)),
        }
    }
}

/// Failure while materializing a template
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk template directory")]
    Walk(#[from] walkdir::Error),

    #[error("invalid package.json at {}", path.display())]
    PackageJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package.json at {} is not a JSON object", .0.display())]
    PackageJsonShape(PathBuf),
}

impl ScaffoldError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_io_maps_to_interrupted() {
        let err: PromptError = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c").into();
        assert!(matches!(err, PromptError::Interrupted));
    }

    #[test]
    fn test_other_io_maps_to_unsupported() {
        let err: PromptError = io::Error::new(io::ErrorKind::Other, "not a tty").into();
        assert!(matches!(err, PromptError::Unsupported(Some(_))));
    }

    #[test]
    fn test_io_error_message_names_path() {
        let err = ScaffoldError::io(
            "Failed to copy",
            "/tmp/x",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to copy /tmp/x");
    }
}
