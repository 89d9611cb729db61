use std::fmt;

/// Leveled printer bound to an [`std::io::Write`] target.
///
/// The sink consults the process-wide threshold on every emission, renders the
/// optional call-site prefix and the message body into a reusable scratch
/// buffer, and hands the result to the writer in a single `write_all` call.
/// Concurrent sinks sharing one stream therefore never split a message.
///
/// # Examples
///
/// ```
/// use printer::{PrintLevel, PrintSink};
///
/// let mut sink = PrintSink::new(Vec::new());
/// sink.emit_with_threshold(
///     PrintLevel::Info,
///     PrintLevel::Warning,
///     "/a/b/c.cpp",
///     7,
///     format_args!("value={}\n", 5),
/// )?;
/// assert_eq!(sink.into_inner(), b"value=5\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct PrintSink<W> {
    writer: W,
    scratch: String,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for PrintSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}
