//! crates/settings/src/error.rs
//! Errors raised while loading settings.

use std::io;
use std::path::PathBuf;

use printer::PrintLevelError;
use thiserror::Error;

/// Failure to load or interpret estimator settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("unable to open the configuration file {path}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// A line could not be interpreted as a key/value pair.
    #[error("{origin}: line {line}: {message}")]
    Parse {
        /// File path, or `<input>` for in-memory documents.
        origin: String,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
    /// A parameter override was not of the form `KEY=VALUE`.
    #[error("invalid parameter override `{0}`: expected KEY=VALUE")]
    InvalidOverride(String),
    /// The `verbosity` value is not a valid print level.
    #[error(transparent)]
    InvalidVerbosity(#[from] PrintLevelError),
}

impl SettingsError {
    /// Returns `true` for the fatal-configuration case of an invalid verbosity.
    #[must_use]
    pub const fn is_invalid_verbosity(&self) -> bool {
        matches!(self, Self::InvalidVerbosity(_))
    }
}
