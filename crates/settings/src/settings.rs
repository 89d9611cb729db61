//! crates/settings/src/settings.rs
//! Loaded settings plus parameter-store overrides.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use printer::PrintLevel;

use crate::error::SettingsError;
use crate::parser::Parser;

/// Key holding the requested print level.
pub const VERBOSITY_KEY: &str = "verbosity";

/// Flat key/value settings read from a file, with overrides layered on top.
///
/// Overrides play the role of a parameter store: when both sources define a
/// key, the override wins.
///
/// # Examples
///
/// ```
/// use printer::PrintLevel;
/// use settings::Settings;
///
/// let settings = Settings::parse_str("verbosity: WARNING\n")?
///     .with_override("verbosity", "ERROR");
/// assert_eq!(settings.verbosity()?, Some(PrintLevel::Error));
/// # Ok::<(), settings::SettingsError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    source: Option<PathBuf>,
    entries: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl Settings {
    /// Reads and parses the settings file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();
        let entries = Parser::new(&contents, &origin).parse()?;
        tracing::debug!(path = %origin, keys = entries.len(), "loaded settings file");

        Ok(Self {
            source: Some(path.to_path_buf()),
            entries,
            overrides: BTreeMap::new(),
        })
    }

    /// Parses settings from an in-memory document.
    pub fn parse_str(input: &str) -> Result<Self, SettingsError> {
        let entries = Parser::new(input, "<input>").parse()?;
        Ok(Self {
            source: None,
            entries,
            overrides: BTreeMap::new(),
        })
    }

    /// Returns the file the settings were read from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Adds an override, replacing any earlier override for the same key.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_override(key, value);
        self
    }

    /// Adds an override in place.
    pub fn set_override(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        tracing::debug!(key = %key, value = %value, "parameter override");
        self.overrides.insert(key, value);
    }

    /// Adds an override written as `KEY=VALUE`.
    pub fn apply_override(&mut self, assignment: &str) -> Result<(), SettingsError> {
        let (key, value) = parse_override(assignment)?;
        self.set_override(key, value);
        Ok(())
    }

    /// Looks up a value, preferring overrides.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.overrides
            .get(key)
            .or_else(|| self.entries.get(key))
            .map(String::as_str)
    }

    /// Reports whether either source defines `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the effective key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut merged: BTreeMap<&str, &str> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        merged.extend(self.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        merged.into_iter()
    }

    /// Number of distinct effective keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Reports whether no keys are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.overrides.is_empty()
    }

    /// Resolves the requested print level.
    ///
    /// `Ok(None)` means no verbosity was configured and the current threshold
    /// should be kept. An unrecognised name is [`SettingsError::InvalidVerbosity`].
    pub fn verbosity(&self) -> Result<Option<PrintLevel>, SettingsError> {
        self.get(VERBOSITY_KEY)
            .map(str::parse::<PrintLevel>)
            .transpose()
            .map_err(SettingsError::from)
    }
}

/// Splits a `KEY=VALUE` assignment.
pub fn parse_override(assignment: &str) -> Result<(&str, &str), SettingsError> {
    match assignment.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(SettingsError::InvalidOverride(assignment.to_owned())),
    }
}
