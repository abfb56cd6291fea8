use std::fs;

use commandex_core::ExErrorKind;
use commandex_engine::config::CONFIG_FILE_NAME;
use commandex_engine::CommandexConfig;
use tempfile::TempDir;

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().unwrap();
    let config = CommandexConfig::load_or_default(None, dir.path()).unwrap();
    assert_eq!(config, CommandexConfig::default());
}

#[test]
fn test_load_or_default_picks_up_file_in_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[refresh]\ndelay_ms = 75\n\n[goals]\ndefault = \"build\"\n",
    )
    .unwrap();

    let config = CommandexConfig::load_or_default(None, dir.path()).unwrap();
    assert_eq!(config.refresh.delay_ms, 75);
    assert_eq!(config.build_registry().unwrap().default_goal_id(), "build");
}

#[test]
fn test_explicit_missing_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = CommandexConfig::load_or_default(Some(&missing), dir.path()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
    assert_eq!(err.op(), Some("config_load"));
}

#[test]
fn test_invalid_file_is_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[[goals.extra]]\nid = \"\"\nlabel = \"Empty\"\n").unwrap();

    let err = CommandexConfig::load(&path).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidConfig);
    assert_eq!(err.op(), Some("config_load"));
}
