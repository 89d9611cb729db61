//! crates/printer/src/levels.rs
//! Ordered severity levels shared by the threshold and every emission.

use std::fmt;
use std::str::FromStr;

use crate::error::PrintLevelError;

/// Severity of a message, and the process-wide threshold messages are compared against.
///
/// The discriminants are ordered from most verbose to most suppressive, so the
/// derived [`Ord`] implementation is the filtering order:
/// `All < Debug < Info < Warning < Error < Silent`.
///
/// # Examples
///
/// ```
/// use printer::PrintLevel;
///
/// assert!(PrintLevel::Debug < PrintLevel::Info);
/// assert_eq!("WARNING".parse::<PrintLevel>().unwrap(), PrintLevel::Warning);
/// assert_eq!(PrintLevel::Error.to_string(), "ERROR");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PrintLevel {
    /// Everything, including the most detailed traces.
    All = 0,
    /// Debugging output. Thresholds at or below this level add call-site prefixes.
    Debug = 1,
    /// Regular progress information. The default threshold.
    #[default]
    Info = 2,
    /// Recoverable problems.
    Warning = 3,
    /// Failures.
    Error = 4,
    /// Threshold-only level that suppresses every tagged message.
    Silent = 5,
}

impl PrintLevel {
    /// All levels in filtering order.
    pub const ALL_LEVELS: [Self; 6] = [
        Self::All,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Silent,
    ];

    /// Canonical names accepted by [`FromStr`], in filtering order.
    pub const VALID_NAMES: [&'static str; 6] = ["ALL", "DEBUG", "INFO", "WARNING", "ERROR", "SILENT"];

    /// Returns the canonical uppercase name of the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Silent => "SILENT",
        }
    }

    /// Returns the raw discriminant stored in the process-wide threshold.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decodes a raw discriminant, returning `None` for values outside `0..=5`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::All),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warning),
            4 => Some(Self::Error),
            5 => Some(Self::Silent),
            _ => None,
        }
    }

    /// Reports whether a message tagged `self` passes the given threshold.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        self >= threshold
    }

    /// Reports whether a threshold of `self` is verbose enough to prefix call sites.
    #[must_use]
    pub fn shows_location(self) -> bool {
        self <= Self::Debug
    }
}

impl fmt::Display for PrintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrintLevel {
    type Err = PrintLevelError;

    /// Matches one of the six canonical names exactly. No trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL_LEVELS
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| PrintLevelError::UnknownName(s.to_owned()))
    }
}

impl TryFrom<u8> for PrintLevel {
    type Error = PrintLevelError;

    fn try_from(value: u8) -> Result<Self, PrintLevelError> {
        Self::from_u8(value).ok_or(PrintLevelError::OutOfRange(value))
    }
}

impl From<PrintLevel> for u8 {
    fn from(level: PrintLevel) -> Self {
        level.as_u8()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PrintLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrintLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
