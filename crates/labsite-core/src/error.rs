//! Error types for labsite.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading site inputs or writing the site.
///
/// Row grouping itself cannot fail; these errors come from the layers
/// around it (roster store, configuration, filesystem).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A role tag outside the closed set of known roles.
    #[error("Unknown role tag '{tag}'")]
    UnknownRole {
        /// The tag as it appeared in the input
        tag: String,
    },

    /// Input data could not be parsed (YAML, TOML, frontmatter).
    #[error("Parse error: {message}")]
    Parse {
        /// What failed to parse, and why
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// Input validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Field or record that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// I/O error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    IoPath {
        /// The file or directory being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenience `Result` type alias for labsite operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new unknown-role error.
    pub fn unknown_role<S: Into<String>>(tag: S) -> Self {
        Error::UnknownRole { tag: tag.into() }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns whether this error stems from bad site inputs rather than
    /// the environment.
    pub fn is_input_error(&self) -> bool {
        match self {
            Error::UnknownRole { .. } => true,
            Error::Parse { .. } => true,
            Error::Config { .. } => true,
            Error::Validation { .. } => true,
            Error::IoPath { .. } => false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_role_display() {
        let err = Error::unknown_role("Alumni");
        assert_eq!(err.to_string(), "Unknown role tag 'Alumni'");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse("bad yaml");
        assert_eq!(err.to_string(), "Parse error: bad yaml");
    }

    #[test]
    fn test_config_error() {
        let err = Error::config("output_dir must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: output_dir must not be empty"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_validation_error_with_field() {
        let err = Error::validation_field("members[2].name", "must not be empty");
        let Error::Validation { field, message } = err else {
            unreachable!("Expected Validation error variant");
        };
        assert_eq!(field, Some("members[2].name".to_string()));
        assert_eq!(message, "must not be empty");
    }

    #[test]
    fn test_validation_without_field() {
        let err = Error::validation("empty roster");
        let Error::Validation { field, .. } = err else {
            unreachable!("Expected Validation error");
        };
        assert_eq!(field, None);
    }

    #[test]
    fn test_io_with_path_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io_with_path(io, "content/roster.yaml");
        let msg = err.to_string();
        assert!(msg.contains("content/roster.yaml"));
        assert!(msg.contains("missing"));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
