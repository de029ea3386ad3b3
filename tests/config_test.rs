//! Integration tests for Settings layered loading.
//!
//! These tests pass an explicit global config location (temp directories only)
//! and assume no `ZTCTL_*` variables are set in the test environment.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ztctl::application::ApplicationError;
use ztctl::config::Settings;

#[test]
fn given_no_global_file_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load_from(Some(dir.path().join("ztctl.toml").as_path())).expect("load");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ztctl.toml");
    fs::write(
        &path,
        r#"
host = "10.147.17.1"
port = 19993
authtoken_path = "/etc/zerotier/authtoken.secret"
"#,
    )
    .unwrap();

    let settings = Settings::load_from(Some(path.as_path())).expect("load");

    assert_eq!(settings.host, "10.147.17.1");
    assert_eq!(settings.port, 19993);
    assert_eq!(
        settings.authtoken_path,
        Some(PathBuf::from("/etc/zerotier/authtoken.secret"))
    );
    assert_eq!(settings.endpoint().base_url(), "http://10.147.17.1:19993");
}

#[test]
fn given_partial_global_file_when_load_then_unset_keys_keep_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ztctl.toml");
    fs::write(&path, "port = 9999\n").unwrap();

    let settings = Settings::load_from(Some(path.as_path())).expect("load");

    assert_eq!(settings.host, "localhost");
    assert_eq!(settings.port, 9999);
    assert!(settings.authtoken_path.is_none());
}

#[test]
fn given_malformed_global_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ztctl.toml");
    fs::write(&path, "port = \"not a number\"\n").unwrap();

    let err = Settings::load_from(Some(path.as_path())).unwrap_err();

    match err {
        ApplicationError::Config { message } => {
            assert!(message.contains("ztctl.toml"), "{message}");
        }
        other => panic!("expected Config, got {other:?}"),
    }
}

#[test]
fn given_cli_overrides_when_applied_after_load_then_flags_win() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ztctl.toml");
    fs::write(&path, "host = \"fromfile\"\nport = 1\n").unwrap();

    let settings = Settings::load_from(Some(path.as_path()))
        .expect("load")
        .with_overrides(Some("fromflag".into()), None);

    assert_eq!(settings.host, "fromflag");
    assert_eq!(settings.port, 1);
}
