//! crates/printer/src/emit.rs
//! Standard-output entry points used by the printing macros.

use std::fmt;
use std::io;

use crate::levels::PrintLevel;
use crate::sink::PrintSink;

/// Emits a message to standard output if `level` passes the current threshold.
///
/// This is the expansion target of [`print_all!`](crate::print_all) and its
/// siblings. Write failures on standard output are ignored, matching the
/// fire-and-forget nature of diagnostic printing.
pub fn emit(level: PrintLevel, file: &str, line: u32, args: fmt::Arguments<'_>) {
    let _ = try_emit(level, file, line, args);
}

/// Like [`emit`], reporting write failures to the caller.
pub fn try_emit(
    level: PrintLevel,
    file: &str,
    line: u32,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    if !crate::threshold::enabled(level) {
        return Ok(());
    }
    PrintSink::new(io::stdout().lock()).emit(level, file, line, args)
}
