//! crates/cli/src/arguments.rs
//! Command-line definition and the parsed form handed to the runner.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};

/// Program name used when `argv` is empty.
pub const PROGRAM_NAME: &str = "run-subscribe-msckf";

/// Configuration path used when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "unset_path_to_config.yaml";

/// Parsed command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Settings file to load.
    pub config_path: PathBuf,
    /// `--verbosity LEVEL`, applied on top of every other source.
    pub verbosity: Option<String>,
    /// `--param KEY=VALUE` assignments in the order given.
    pub params: Vec<String>,
}

fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Load estimator settings and configure the process-wide print level.")
        .arg(
            Arg::new("config_path")
                .value_name("CONFIG_PATH")
                .help("Settings file to load.")
                .default_value(DEFAULT_CONFIG_PATH)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .value_name("LEVEL")
                .help("Print level: ALL, DEBUG, INFO, WARNING, ERROR, or SILENT.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("param")
                .long("param")
                .short('p')
                .value_name("KEY=VALUE")
                .help("Override a setting, as a parameter server would.")
                .action(ArgAction::Append),
        )
}

/// Parses `arguments` (including the program name).
///
/// Help and version requests surface as [`clap::Error`] values whose kind is
/// [`clap::error::ErrorKind::DisplayHelp`] or
/// [`clap::error::ErrorKind::DisplayVersion`].
pub fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let config_path = matches
        .remove_one::<OsString>("config_path")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let verbosity = matches.remove_one::<String>("verbosity");
    let params = matches
        .remove_many::<String>("param")
        .map(Iterator::collect)
        .unwrap_or_default();

    Ok(ParsedArgs {
        config_path,
        verbosity,
        params,
    })
}
