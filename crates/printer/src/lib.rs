#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `printer` is the process-wide diagnostic printer used by every component
//! of the estimator. Messages are tagged with a [`PrintLevel`] and compared
//! against a single threshold; in verbose modes each message is prefixed with
//! a short `<file>:<line> ` call-site marker.
//!
//! # Design
//!
//! - The threshold lives in an atomic cell ([`threshold`]) initialised to
//!   [`PrintLevel::Info`]. Readers always observe one of the six levels.
//! - [`PrintSink`] wraps any [`std::io::Write`] target and performs the
//!   filtering, prefixing, and formatting. The `print_*!` macros route through
//!   a sink over standard output, capturing `file!()` and `line!()`.
//! - Invalid level names are reported as [`PrintLevelError`] values rather than
//!   terminating the process. Applications decide whether the error is fatal
//!   and print [`PrintLevelError::write_diagnostic`] before exiting.
//!
//! # Invariants
//!
//! - A message is written iff its level is at least the current threshold.
//! - The call-site prefix appears iff the threshold is at or below
//!   [`PrintLevel::Debug`], independent of the message's own level.
//! - The printer never adds a trailing newline to message bodies.
//!
//! # Examples
//!
//! ```
//! use printer::{PrintLevel, PrintSink};
//!
//! let mut sink = PrintSink::new(Vec::new());
//! sink.emit_with_threshold(
//!     PrintLevel::All,
//!     PrintLevel::Info,
//!     "/a/b/c.cpp",
//!     7,
//!     format_args!("ok\n"),
//! )?;
//! assert_eq!(sink.into_inner(), b"c.cpp:7 ok\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! With the `tracing` feature, [`PrinterLayer`] routes `tracing` events
//! through the same rules.

pub mod colors;
mod emit;
mod error;
mod levels;
pub mod location;
mod macros;
mod render;
mod sink;
pub mod threshold;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use emit::{emit, try_emit};
pub use error::PrintLevelError;
pub use levels::PrintLevel;
pub use render::{render, render_into};
pub use sink::PrintSink;
pub use threshold::{
    SetLevelError, current_level, set_level, set_level_by_name, set_level_raw,
};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{PrinterLayer, init_tracing, print_level_for};
