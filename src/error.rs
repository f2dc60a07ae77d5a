//! Crate-level error types.

use std::fmt;

/// Errors produced by the vitrine crate.
#[derive(Debug)]
pub enum VitrineError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Malformed scroll marker string (e.g. `"top sideways"`).
    Marker(String),
    /// Options parsed but describe an unusable setup (no anchors, unknown
    /// section, ...).
    Config(String),
    /// Failure reported by the viewer runtime (model load, plugin
    /// registration).
    Runtime(String),
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Marker(msg) => write!(f, "invalid scroll marker: {msg}"),
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Runtime(msg) => write!(f, "viewer runtime error: {msg}"),
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrineError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
