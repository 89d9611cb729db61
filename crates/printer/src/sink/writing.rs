use std::fmt;
use std::io::{self, Write};

use super::PrintSink;
use crate::levels::PrintLevel;
use crate::location::CallSite;
use crate::render::render_into;
use crate::threshold::{self, SetLevelError};

impl<W> PrintSink<W>
where
    W: Write,
{
    /// Emits a message against the current process-wide threshold.
    pub fn emit(
        &mut self,
        level: PrintLevel,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.emit_with_threshold(threshold::current_level(), level, file, line, args)
    }

    /// Emits a message against an explicit threshold.
    ///
    /// Filtered messages write nothing at all: no prefix, no body.
    pub fn emit_with_threshold(
        &mut self,
        threshold: PrintLevel,
        level: PrintLevel,
        file: &str,
        line: u32,
        args: fmt::Arguments<'_>,
    ) -> io::Result<()> {
        self.scratch.clear();
        let written = render_into(
            &mut self.scratch,
            threshold,
            level,
            CallSite::new(file, line),
            args,
        )
        .map_err(|_| io::Error::other("formatter error while rendering message"))?;

        if written {
            self.writer.write_all(self.scratch.as_bytes())?;
        }
        Ok(())
    }

    /// Sets the process-wide threshold, confirming on this sink's writer.
    pub fn set_level(&mut self, level: PrintLevel) -> io::Result<PrintLevel> {
        threshold::set_level_with_writer(level, &mut self.writer)
    }

    /// Parses `name` and sets the process-wide threshold, confirming on this sink's writer.
    pub fn set_level_by_name(&mut self, name: &str) -> Result<PrintLevel, SetLevelError> {
        threshold::set_level_by_name_with_writer(name, &mut self.writer)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
