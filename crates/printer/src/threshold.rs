//! crates/printer/src/threshold.rs
//! Process-wide print threshold shared by every emitter.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::PrintLevelError;
use crate::levels::PrintLevel;

static CURRENT_PRINT_LEVEL: AtomicU8 = AtomicU8::new(PrintLevel::Info.as_u8());

/// Returns the current process-wide threshold.
pub fn current_level() -> PrintLevel {
    let raw = CURRENT_PRINT_LEVEL.load(Ordering::Acquire);
    // Only `store_level` writes the cell, and it only stores valid discriminants.
    PrintLevel::from_u8(raw).unwrap_or_default()
}

fn store_level(level: PrintLevel) -> PrintLevel {
    let previous = CURRENT_PRINT_LEVEL.swap(level.as_u8(), Ordering::AcqRel);
    PrintLevel::from_u8(previous).unwrap_or_default()
}

/// Replaces the threshold and writes the confirmation line to `writer`.
///
/// Returns the threshold that was in effect before the call. The threshold is
/// updated even when writing the confirmation fails.
pub fn set_level_with_writer<W: Write + ?Sized>(
    level: PrintLevel,
    writer: &mut W,
) -> io::Result<PrintLevel> {
    let previous = store_level(level);
    writeln!(writer, "Setting printing level to: {level}")?;
    Ok(previous)
}

/// Replaces the threshold and confirms the new level on standard output.
///
/// Returns the previous threshold.
pub fn set_level(level: PrintLevel) -> PrintLevel {
    let previous = store_level(level);
    let _ = writeln!(io::stdout().lock(), "Setting printing level to: {level}");
    previous
}

/// Parses `name` and, if it is one of the six canonical names, sets the threshold.
///
/// A rejected name leaves the threshold untouched and prints nothing; the
/// caller decides whether the error is fatal.
pub fn set_level_by_name(name: &str) -> Result<PrintLevel, PrintLevelError> {
    let level = name.parse()?;
    set_level(level);
    Ok(level)
}

/// Like [`set_level_by_name`], confirming on `writer` instead of standard output.
pub fn set_level_by_name_with_writer<W: Write + ?Sized>(
    name: &str,
    writer: &mut W,
) -> Result<PrintLevel, SetLevelError> {
    let level = name.parse()?;
    set_level_with_writer(level, writer)?;
    Ok(level)
}

/// Sets the threshold from a raw discriminant supplied by a caller outside the closed type.
pub fn set_level_raw(value: u8) -> Result<PrintLevel, PrintLevelError> {
    let level = PrintLevel::try_from(value)?;
    set_level(level);
    Ok(level)
}

/// Reports whether a message tagged `level` passes the current threshold.
pub fn enabled(level: PrintLevel) -> bool {
    level.passes(current_level())
}

/// Failure of a writer-backed level change.
#[derive(Debug, thiserror::Error)]
pub enum SetLevelError {
    /// The requested level was invalid; the threshold was not changed.
    #[error(transparent)]
    Level(#[from] PrintLevelError),
    /// The threshold changed but the confirmation could not be written.
    #[error("failed to write level confirmation: {0}")]
    Io(#[from] io::Error),
}
