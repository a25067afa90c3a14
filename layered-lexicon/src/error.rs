//! Error types for dictionary loading.
//!
//! All of these are initialization failures: a lexicon that loads is never
//! consulted in a way that can fail afterwards.

use thiserror::Error;

/// Errors that can occur while loading dictionaries or their configuration.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A dictionary or config file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// A malformed dictionary line.
    #[error("{source_name}:{line}: {message}")]
    Parse {
        source_name: String,
        line: usize,
        message: String,
    },

    /// A config file that is not valid TOML or has unexpected fields.
    #[error("invalid lexicon config {path}: {source}")]
    Config {
        path: String,
        source: toml::de::Error,
    },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;
