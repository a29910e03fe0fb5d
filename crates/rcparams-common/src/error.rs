//! Error types shared by every rcparams crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rcparams operations.
pub type Result<T> = std::result::Result<T, RcError>;

/// Errors raised while loading, querying or mutating runtime parameters.
#[derive(Error, Debug)]
pub enum RcError {
    /// A template line could not be parsed.
    #[error("Parse error in {source_name} at line {line}: {message}")]
    Parse {
        /// Name of the template being parsed (file path or `<bundled>`).
        source_name: String,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A value does not satisfy the rule of its parameter.
    #[error("Invalid value for '{key}': {message}")]
    Validation {
        /// Parameter key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },

    /// The key is not declared by the bundled default template.
    #[error("Unknown rcParam '{key}'")]
    UnknownKey {
        /// The offending key.
        key: String,
    },

    /// A template file could not be read.
    #[error("Failed to read rc file '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A key search pattern is not a valid regular expression.
    #[error("Invalid key pattern '{pattern}': {message}")]
    Pattern {
        /// The pattern as given.
        pattern: String,
        /// Compiler message.
        message: String,
    },
}

impl RcError {
    /// Create a new parse error
    pub fn parse(source_name: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown key error
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    /// Create a new I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new pattern error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Check if this is a parse error
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a validation error
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is an unknown key error
    pub const fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. })
    }

    /// The parameter key this error is about, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Validation { key, .. } | Self::UnknownKey { key } => Some(key),
            _ => None,
        }
    }
}
