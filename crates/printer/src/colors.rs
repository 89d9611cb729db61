//! crates/printer/src/colors.rs
//! ANSI escape sequences for colouring message templates.
//!
//! Inline format arguments pick these up directly:
//!
//! ```
//! use printer::colors::{BOLDRED, RESET};
//!
//! let line = format!("{BOLDRED}failed{RESET}");
//! assert_eq!(line, "\x1b[1m\x1b[31mfailed\x1b[0m");
//! ```

#![allow(missing_docs)]

pub const RESET: &str = "\x1b[0m";
pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";
pub const REDPURPLE: &str = "\x1b[95m";
pub const BOLDBLACK: &str = "\x1b[1m\x1b[30m";
pub const BOLDRED: &str = "\x1b[1m\x1b[31m";
pub const BOLDGREEN: &str = "\x1b[1m\x1b[32m";
pub const BOLDYELLOW: &str = "\x1b[1m\x1b[33m";
pub const BOLDBLUE: &str = "\x1b[1m\x1b[34m";
pub const BOLDMAGENTA: &str = "\x1b[1m\x1b[35m";
pub const BOLDCYAN: &str = "\x1b[1m\x1b[36m";
pub const BOLDWHITE: &str = "\x1b[1m\x1b[37m";
pub const BOLDREDPURPLE: &str = "\x1b[1m\x1b[95m";
