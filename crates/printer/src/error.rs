//! crates/printer/src/error.rs
//! The single error kind of the printer: an invalid severity specification.

use std::io::{self, Write};

use thiserror::Error;

use crate::levels::PrintLevel;

/// An unrecognised level name or an out-of-range raw level value.
///
/// The printer never terminates the process itself. Embedding applications
/// that treat a bad verbosity as fatal report it with
/// [`write_diagnostic`](Self::write_diagnostic) and exit with a failure status.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum PrintLevelError {
    /// The token matched none of the six canonical names.
    #[error("Invalid print level requested: {0}")]
    UnknownName(String),
    /// The raw value does not correspond to any defined level.
    #[error("Invalid print level requested: {0}")]
    OutOfRange(u8),
}

impl PrintLevelError {
    /// Writes the two-line fatal diagnostic: the rejected input, then the valid names.
    ///
    /// ```
    /// use printer::PrintLevelError;
    ///
    /// let mut out = Vec::new();
    /// PrintLevelError::UnknownName("BOGUS".into()).write_diagnostic(&mut out)?;
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Invalid print level requested: BOGUS\n\
    ///      Valid levels are: ALL, DEBUG, INFO, WARNING, ERROR, SILENT\n"
    /// );
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_diagnostic<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")?;
        writeln!(
            writer,
            "Valid levels are: {}",
            PrintLevel::VALID_NAMES.join(", ")
        )
    }
}
