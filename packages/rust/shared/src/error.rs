//! Error types for keybindings.
//!
//! Library crates use [`KeybindingsError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for the final report.

use std::path::PathBuf;

/// Top-level error type for all keybindings operations.
#[derive(Debug, thiserror::Error)]
pub enum KeybindingsError {
    /// Settings loading, serialization or environment error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A descriptor's pattern is not usable as a keybinding matcher.
    #[error("regexp could not be compiled ({pattern}): {message}")]
    Pattern { pattern: String, message: String },

    /// Scanning the target config file failed.
    #[error("error parsing config file ({path:?}): {message}")]
    Scan { path: PathBuf, message: String },

    /// A single line exceeded the scanner's line limit.
    #[error("line {line} is too long ({length} bytes)")]
    LineTooLong { line: usize, length: usize },

    /// No application could be selected.
    #[error("{message}")]
    Selection { message: String },

    /// Reading the interactive choice failed.
    #[error("an error occurred while reading input: {source}")]
    Input { source: std::io::Error },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KeybindingsError>;

impl KeybindingsError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a selection error from any displayable message.
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::Selection {
            message: msg.into(),
        }
    }

    pub fn pattern(pattern: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
