//! crates/cli/src/run.rs
//! Startup sequence: parse arguments, load settings, apply the print level.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use printer::colors::{RED, RESET};
use printer::{PrintLevel, PrintSink, current_level};
use settings::{Settings, SettingsError, VERBOSITY_KEY, parse_override};

use crate::arguments::{ParsedArgs, parse_args};

/// Parameter naming the settings file; overrides the positional path.
pub const CONFIG_PATH_KEY: &str = "config_path";

/// Exit status for a completed run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for any startup failure.
pub const EXIT_FAILURE: i32 = 1;

const MAX_EXIT_CODE: i32 = 255;

/// Runs the launcher and returns its exit status.
///
/// An invalid verbosity prints the two-line diagnostic to `stdout` and fails
/// before the settings are reported. Every other failure is reported on
/// `stderr`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write + ?Sized,
    Err: Write + ?Sized,
{
    let parsed = match parse_args(arguments) {
        Ok(parsed) => parsed,
        Err(error) => return report_clap_error(&error, stdout, stderr),
    };

    let settings = match load_settings(&parsed) {
        Ok(settings) => settings,
        Err(error) => {
            let mut sink = PrintSink::new(&mut *stderr);
            let _ = sink.emit(
                PrintLevel::Error,
                file!(),
                line!(),
                format_args!("{RED}{error}{RESET}\n"),
            );
            return EXIT_FAILURE;
        }
    };

    let mut sink = PrintSink::new(&mut *stdout);
    match settings.verbosity() {
        Ok(Some(level)) => {
            let _ = sink.set_level(level);
        }
        Ok(None) => {}
        Err(SettingsError::InvalidVerbosity(error)) => {
            let _ = error.write_diagnostic(sink.get_mut());
            return EXIT_FAILURE;
        }
        Err(other) => {
            let _ = writeln!(stderr, "{other}");
            return EXIT_FAILURE;
        }
    }

    let path = settings
        .source()
        .map_or_else(|| parsed.config_path.clone(), Path::to_path_buf);
    report_settings(&mut sink, &settings, &path);
    let _ = sink.flush();
    EXIT_SUCCESS
}

/// Converts an exit status into an [`std::process::ExitCode`], clamping to `0..=255`.
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn report_clap_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write + ?Sized,
    Err: Write + ?Sized,
{
    let rendered = error.render().to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = stdout.write_all(rendered.as_bytes());
            let _ = stdout.flush();
            EXIT_SUCCESS
        }
        _ => {
            let _ = stderr.write_all(rendered.as_bytes());
            let _ = stderr.flush();
            EXIT_FAILURE
        }
    }
}

/// Loads the settings file and layers `--param` then `--verbosity` on top.
fn load_settings(parsed: &ParsedArgs) -> Result<Settings, SettingsError> {
    let config_path = resolve_config_path(parsed)?;
    tracing::debug!(path = %config_path.display(), "loading settings");
    let mut settings = Settings::from_file(&config_path)?;

    for assignment in &parsed.params {
        settings.apply_override(assignment)?;
    }
    if let Some(verbosity) = &parsed.verbosity {
        settings.set_override(VERBOSITY_KEY, verbosity.as_str());
    }

    Ok(settings)
}

/// The last `--param config_path=...` wins over the positional path.
fn resolve_config_path(parsed: &ParsedArgs) -> Result<PathBuf, SettingsError> {
    let mut config_path = parsed.config_path.clone();
    for assignment in &parsed.params {
        let (key, value) = parse_override(assignment)?;
        if key == CONFIG_PATH_KEY {
            config_path = PathBuf::from(value);
        }
    }
    Ok(config_path)
}

fn report_settings<W: Write>(sink: &mut PrintSink<W>, settings: &Settings, path: &Path) {
    let _ = sink.emit(
        PrintLevel::Debug,
        file!(),
        line!(),
        format_args!("loaded {} settings from {}\n", settings.len(), path.display()),
    );
    for (key, value) in settings.iter() {
        let _ = sink.emit(
            PrintLevel::All,
            file!(),
            line!(),
            format_args!("  {key}: {value}\n"),
        );
    }
    let _ = sink.emit(
        PrintLevel::Info,
        file!(),
        line!(),
        format_args!("print level is {}\n", current_level()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use printer::threshold;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    const PROGRAM: &str = crate::arguments::PROGRAM_NAME;

    struct Run {
        status: i32,
        stdout: String,
        stderr: String,
    }

    fn write_config(contents: &str) -> (TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimator_config.yaml");
        fs::write(&path, contents).unwrap();
        let path = path.to_str().unwrap().to_owned();
        (dir, path)
    }

    fn invoke(args: &[&str]) -> Run {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut argv = vec![PROGRAM];
        argv.extend_from_slice(args);
        let status = run(argv, &mut stdout, &mut stderr);

        let mut confirmation = Vec::new();
        threshold::set_level_with_writer(PrintLevel::Info, &mut confirmation).unwrap();

        Run {
            status,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        }
    }

    #[test]
    #[serial(print_level)]
    fn verbosity_from_file_is_applied_and_confirmed() {
        let (_dir, path) = write_config("verbosity: \"WARNING\"\nuse_fej: true\n");
        let run = invoke(&[&path]);

        assert_eq!(run.status, EXIT_SUCCESS);
        assert_eq!(run.stdout, "Setting printing level to: WARNING\n");
        assert!(run.stderr.is_empty());
    }

    #[test]
    #[serial(print_level)]
    fn invalid_verbosity_prints_diagnostic_and_fails() {
        let (_dir, path) = write_config("verbosity: BOGUS\n");
        let run = invoke(&[&path]);

        assert_eq!(run.status, EXIT_FAILURE);
        assert_eq!(
            run.stdout,
            "Invalid print level requested: BOGUS\n\
             Valid levels are: ALL, DEBUG, INFO, WARNING, ERROR, SILENT\n"
        );
        assert_eq!(current_level(), PrintLevel::Info);
    }

    #[test]
    #[serial(print_level)]
    fn command_line_verbosity_overrides_file_and_params() {
        let (_dir, path) = write_config("verbosity: ERROR\n");
        let run = invoke(&[&path, "--param", "verbosity=WARNING", "--verbosity", "INFO"]);

        assert_eq!(run.status, EXIT_SUCCESS);
        assert_eq!(
            run.stdout,
            "Setting printing level to: INFO\nprint level is INFO\n"
        );
    }

    #[test]
    #[serial(print_level)]
    fn absent_verbosity_keeps_default_threshold() {
        let (_dir, path) = write_config("max_cameras: 2\n");
        let run = invoke(&[&path]);

        assert_eq!(run.status, EXIT_SUCCESS);
        assert_eq!(run.stdout, "print level is INFO\n");
    }

    #[test]
    #[serial(print_level)]
    fn verbose_levels_report_every_setting_with_location() {
        let (_dir, path) = write_config("verbosity: ALL\nmax_cameras: 2\n");
        let run = invoke(&[&path]);

        assert_eq!(run.status, EXIT_SUCCESS);
        let mut lines = run.stdout.lines();
        assert_eq!(lines.next(), Some("Setting printing level to: ALL"));
        assert!(lines.next().unwrap().contains("loaded 2 settings from"));
        assert!(run.stdout.contains("run.rs:"));
        assert!(run.stdout.contains("  max_cameras: 2\n"));
        assert!(run.stdout.contains("  verbosity: ALL\n"));
        assert!(run.stdout.ends_with("print level is ALL\n"));
    }

    #[test]
    #[serial(print_level)]
    fn quoted_empty_verbosity_is_fatal() {
        let (_dir, path) = write_config("verbosity: \"\"\n");
        let run = invoke(&[&path]);

        assert_eq!(run.status, EXIT_FAILURE);
        assert_eq!(
            run.stdout,
            "Invalid print level requested: \n\
             Valid levels are: ALL, DEBUG, INFO, WARNING, ERROR, SILENT\n"
        );
        assert_eq!(current_level(), PrintLevel::Info);
    }

    #[test]
    #[serial(print_level)]
    fn config_path_parameter_selects_settings_file() {
        let (_dir, path) = write_config("verbosity: WARNING\n");
        let param = format!("config_path={path}");
        let run = invoke(&["/nonexistent/positional.yaml", "--param", &param]);

        assert_eq!(run.status, EXIT_SUCCESS, "{}", run.stderr);
        assert_eq!(run.stdout, "Setting printing level to: WARNING\n");
    }

    #[test]
    #[serial(print_level)]
    fn config_path_parameter_is_reported_as_source() {
        let (_dir, path) = write_config("verbosity: DEBUG\n");
        let param = format!("config_path={path}");
        let run = invoke(&["--param", &param]);

        assert_eq!(run.status, EXIT_SUCCESS, "{}", run.stderr);
        assert!(run.stdout.contains(&format!("settings from {path}")), "{}", run.stdout);
    }

    #[test]
    #[serial(print_level)]
    fn missing_config_fails_on_stderr() {
        let run = invoke(&["/nonexistent/dir/estimator_config.yaml"]);

        assert_eq!(run.status, EXIT_FAILURE);
        assert!(run.stdout.is_empty());
        assert!(run.stderr.contains("unable to open the configuration file"));
    }

    #[test]
    #[serial(print_level)]
    fn malformed_param_fails_before_level_change() {
        let (_dir, path) = write_config("verbosity: DEBUG\n");
        let run = invoke(&[&path, "--param", "no_separator"]);

        assert_eq!(run.status, EXIT_FAILURE);
        assert!(run.stdout.is_empty());
        assert!(!run.stderr.is_empty());
    }

    #[test]
    #[serial(print_level)]
    fn version_flag_succeeds_on_stdout() {
        let run = invoke(&["--version"]);
        assert_eq!(run.status, EXIT_SUCCESS);
        assert!(run.stdout.contains(env!("CARGO_PKG_VERSION")));
        assert!(run.stderr.is_empty());
    }

    #[test]
    #[serial(print_level)]
    fn unknown_flag_fails_on_stderr() {
        let run = invoke(&["--definitely-invalid-option"]);
        assert_eq!(run.status, EXIT_FAILURE);
        assert!(run.stdout.is_empty());
        assert!(run.stderr.contains("--definitely-invalid-option"));
    }

    #[test]
    fn exit_code_from_clamps_status() {
        assert_eq!(exit_code_from(0), std::process::ExitCode::SUCCESS);
        assert_eq!(exit_code_from(1), std::process::ExitCode::FAILURE);
        assert_eq!(exit_code_from(-3), std::process::ExitCode::SUCCESS);
        assert_eq!(exit_code_from(400), std::process::ExitCode::from(u8::MAX));
    }
}
