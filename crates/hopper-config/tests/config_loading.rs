//! Loading the `[logs]` section from TOML files.

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use hopper_config::{
    Config, ConfigError, ConfigLoader, FileConfigLoader, LogConfig, StaticConfigLoader,
};

fn parse(text: &str) -> Config {
    match Config::from_toml_str(text) {
        Ok(config) => config,
        Err(error) => panic!("configuration should parse: {error}"),
    }
}

#[rstest]
fn empty_file_applies_defaults() {
    let config = parse("");
    let logs = config.logs();
    assert_eq!(logs.error_path(), None);
    assert_eq!(logs.info_path(), None);
    assert!(!logs.verbose());
    assert!(!logs.no_date_time());
    assert_eq!(config, Config::default());
}

#[rstest]
fn reads_every_logs_key() {
    let config = parse(
        r#"
[logs]
error = "./error.log"
info = "./info.log"
verbose = true
nodatetime = "On"
"#,
    );
    let logs = config.logs();
    assert_eq!(logs.error_path(), Some(Path::new("./error.log")));
    assert_eq!(logs.info_path(), Some(Path::new("./info.log")));
    assert!(logs.verbose());
    assert!(logs.no_date_time());
}

#[rstest]
fn empty_paths_disable_files() {
    let config = parse(
        r#"
[logs]
error = ""
info = ""
"#,
    );
    assert_eq!(config.logs().error_path(), None);
    assert_eq!(config.logs().info_path(), None);
}

#[rstest]
#[case("verbose = \"On\"", true)]
#[case("verbose = \"off\"", false)]
#[case("verbose = 1", true)]
#[case("verbose = 0", false)]
#[case("verbose = \"yes\"", true)]
fn verbose_accepts_boolean_like_values(#[case] line: &str, #[case] expected: bool) {
    let config = parse(&format!("[logs]\n{line}\n"));
    assert_eq!(config.logs().verbose(), expected);
}

#[rstest]
#[case("verbose = \"sometimes\"")]
#[case("nodatetime = 7")]
fn rejects_unrecognised_flag_values(#[case] line: &str) {
    let result = Config::from_toml_str(&format!("[logs]\n{line}\n"));
    assert!(result.is_err(), "expected {line:?} to be rejected");
}

#[rstest]
fn ignores_consumer_sections() {
    let config = parse(
        r#"
[rabbitmq]
host = "localhost"
queue = "jobs"

[logs]
verbose = true
"#,
    );
    assert!(config.logs().verbose());
}

#[rstest]
fn builder_helpers_treat_empty_paths_as_disabled() {
    let logs = LogConfig::default()
        .with_error_path("")
        .with_info_path("./info.log")
        .with_verbose(true);
    assert_eq!(logs.error_path(), None);
    assert_eq!(logs.info_path(), Some(Path::new("./info.log")));
    assert!(logs.verbose());
}

#[rstest]
fn file_loader_reads_from_disk() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("hopper.toml");
    fs::write(&path, "[logs]\nnodatetime = true\n").expect("write config");

    let config = FileConfigLoader::new(&path)
        .load()
        .expect("configuration should load");
    assert!(config.logs().no_date_time());
}

#[rstest]
fn file_loader_reports_missing_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("absent.toml");

    let error = FileConfigLoader::new(&path)
        .load()
        .expect_err("loading must fail");
    assert!(matches!(error, ConfigError::Read { .. }), "got {error:?}");
    assert!(error.to_string().contains("absent.toml"));
}

#[rstest]
fn file_loader_reports_malformed_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "[logs\nverbose = true\n").expect("write config");

    let error = Config::load(&path).expect_err("loading must fail");
    assert!(matches!(error, ConfigError::Parse { .. }), "got {error:?}");
}

#[rstest]
fn static_loader_returns_its_configuration() {
    let config = Config::new(LogConfig::default().with_verbose(true));
    let loaded = StaticConfigLoader::new(config.clone())
        .load()
        .expect("static load");
    assert_eq!(loaded, config);
}
