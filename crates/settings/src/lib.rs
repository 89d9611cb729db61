#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Estimator settings as seen by the application entry point.
//!
//! Settings come from a flat key/value file (`key: value` or `key = value`,
//! with YAML directives, comments, and nested blocks skipped) and from
//! `KEY=VALUE` overrides that take precedence, the way a parameter server
//! would. The only key this crate interprets is [`VERBOSITY_KEY`]; everything
//! else is handed through untouched.

mod error;
mod parser;
mod settings;

pub use error::SettingsError;
pub use settings::{Settings, VERBOSITY_KEY, parse_override};
