//! crates/printer/src/render.rs
//! Filtering and formatting of a single emission, independent of any stream.

use std::fmt::{self, Write};

use crate::levels::PrintLevel;
use crate::location::CallSite;

/// Appends the rendered form of a message to `buffer`.
///
/// Returns `Ok(false)` and leaves `buffer` untouched when `level` does not pass
/// `threshold`. Otherwise the call-site prefix is appended when the threshold
/// is at or below [`PrintLevel::Debug`], followed by the formatted body. No
/// newline is added; templates carry their own.
pub fn render_into(
    buffer: &mut String,
    threshold: PrintLevel,
    level: PrintLevel,
    site: CallSite<'_>,
    args: fmt::Arguments<'_>,
) -> Result<bool, fmt::Error> {
    if !level.passes(threshold) {
        return Ok(false);
    }
    if threshold.shows_location() {
        write!(buffer, "{site}")?;
    }
    buffer.write_fmt(args)?;
    Ok(true)
}

/// Renders a message into a fresh string, or `None` when it is filtered out.
///
/// A formatting failure raised by one of the arguments' `Display` impls also
/// yields `None`. Use [`render_into`] to tell the two cases apart.
///
/// ```
/// use printer::{PrintLevel, render};
/// use printer::location::CallSite;
///
/// let site = CallSite::new("/a/b/c.cpp", 7);
/// let verbose = render(PrintLevel::All, PrintLevel::Info, site, format_args!("ok\n"));
/// assert_eq!(verbose.as_deref(), Some("c.cpp:7 ok\n"));
///
/// let quiet = render(PrintLevel::Info, PrintLevel::Debug, site, format_args!("hello\n"));
/// assert_eq!(quiet, None);
/// ```
#[must_use]
pub fn render(
    threshold: PrintLevel,
    level: PrintLevel,
    site: CallSite<'_>,
    args: fmt::Arguments<'_>,
) -> Option<String> {
    let mut buffer = String::new();
    match render_into(&mut buffer, threshold, level, site, args) {
        Ok(true) => Some(buffer),
        Ok(false) | Err(_) => None,
    }
}
