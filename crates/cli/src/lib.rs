#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `run-subscribe-msckf` launcher startup: it reads a
//! settings file, layers command-line overrides on top, and applies the
//! resolved verbosity to the process-wide [`printer`] threshold.
//!
//! # Design
//!
//! [`run`] takes the argument iterator and explicit output handles, so the
//! binary and the tests drive the same code. It returns a numeric status that
//! [`exit_code_from`] converts for `main`.
//!
//! Verbosity is resolved in priority order: `--verbosity`, then any
//! `--param verbosity=...`, then the `verbosity` key of the settings file. When
//! none is present the threshold stays at `INFO`. A `--param config_path=...`
//! selects the settings file in place of the positional path. An unrecognised name is
//! fatal: the launcher prints the printer's two-line diagnostic on standard
//! output and exits with a failure status.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["run-subscribe-msckf", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, cli::EXIT_SUCCESS);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("run-subscribe-msckf "));
//! ```

mod arguments;
mod run;

pub use arguments::{DEFAULT_CONFIG_PATH, PROGRAM_NAME, ParsedArgs, parse_args};
pub use run::{CONFIG_PATH_KEY, EXIT_FAILURE, EXIT_SUCCESS, exit_code_from, run};
