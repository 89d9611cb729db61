//! Loading settings files from disk.

use std::fs;
use std::path::Path;

use printer::PrintLevel;
use settings::{Settings, SettingsError};
use tempfile::tempdir;

#[test]
fn loads_verbosity_from_yaml_style_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("estimator_config.yaml");
    fs::write(
        &path,
        "%YAML:1.0 # need to specify the file type at the top!\n\
         \n\
         verbosity: \"WARNING\" # ALL, DEBUG, INFO, WARNING, ERROR, SILENT\n\
         \n\
         use_fej: true\n\
         integration: \"rk4\"\n\
         init_window_time: 2.0\n",
    )
    .unwrap();

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(settings.source(), Some(path.as_path()));
    assert_eq!(settings.verbosity().unwrap(), Some(PrintLevel::Warning));
    assert_eq!(settings.get("integration"), Some("rk4"));
    assert_eq!(settings.get("init_window_time"), Some("2.0"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Settings::from_file(Path::new("unset_path_to_config.yaml")).unwrap_err();
    match err {
        SettingsError::Io { path, .. } => {
            assert_eq!(path, Path::new("unset_path_to_config.yaml"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_errors_carry_file_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "verbosity DEBUG\n").unwrap();

    let err = Settings::from_file(&path).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("broken.yaml"), "{text}");
    assert!(text.contains("line 1"), "{text}");
}
