//! crates/printer/src/tracing_bridge.rs
//! Bridge between the tracing crate and the leveled printer.
//!
//! [`PrinterLayer`] is a tracing-subscriber layer that sends every tracing
//! event through the same threshold and call-site rules as the printing
//! macros, so workspace crates can use `tracing::debug!` and friends while the
//! process-wide print level stays the single verbosity switch.
//!
//! Level mapping:
//!
//! | tracing | printer   |
//! |---------|-----------|
//! | TRACE   | ALL       |
//! | DEBUG   | DEBUG     |
//! | INFO    | INFO      |
//! | WARN    | WARNING   |
//! | ERROR   | ERROR     |

use std::fmt;
use std::io;

use tracing::subscriber::Interest;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::levels::PrintLevel;
use crate::sink::PrintSink;
use crate::threshold;

/// A tracing layer that prints events through the leveled printer.
///
/// Events carry no implicit newline in tracing, so the layer appends one.
pub struct PrinterLayer<M = fn() -> io::Stdout> {
    make_writer: M,
}

impl PrinterLayer {
    /// Creates a layer that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self {
            make_writer: io::stdout,
        }
    }
}

impl Default for PrinterLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> PrinterLayer<M> {
    /// Replaces the writer factory used for each printed event.
    #[must_use]
    pub fn with_writer<M2>(self, make_writer: M2) -> PrinterLayer<M2>
    where
        M2: for<'w> MakeWriter<'w> + 'static,
    {
        PrinterLayer { make_writer }
    }
}

impl<M> fmt::Debug for PrinterLayer<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrinterLayer").finish_non_exhaustive()
    }
}

/// Maps a tracing level onto the printer's ordering.
#[must_use]
pub const fn print_level_for(level: &Level) -> PrintLevel {
    match *level {
        Level::TRACE => PrintLevel::All,
        Level::DEBUG => PrintLevel::Debug,
        Level::INFO => PrintLevel::Info,
        Level::WARN => PrintLevel::Warning,
        Level::ERROR => PrintLevel::Error,
    }
}

impl<S, M> Layer<S> for PrinterLayer<M>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    M: for<'w> MakeWriter<'w> + 'static,
{
    // The threshold can change at any time, so callsite interest must not be cached.
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        threshold::enabled(print_level_for(metadata.level()))
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = print_level_for(metadata.level());
        if !threshold::enabled(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let file = metadata.file().unwrap_or_else(|| metadata.target());
        let line = metadata.line().unwrap_or(0);
        let mut sink = PrintSink::new(self.make_writer.make_writer());
        let _ = sink.emit(level, file, line, format_args!("{message}\n"));
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global registry with a [`PrinterLayer`] writing to standard output.
///
/// Fails when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(PrinterLayer::new())
        .try_init()
}
