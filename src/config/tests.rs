use super::*;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = RunConfig::default();

    assert_eq!(config.folder, PathBuf::from("./books"));
    assert_eq!(config.chunk_size_kb, 64);
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.json");
    fs::write(&path, r#"{"folder": "/data/books", "chunk_size_kb": 16}"#).unwrap();

    let config = RunConfig::load(&path).unwrap();

    assert_eq!(config.folder, PathBuf::from("/data/books"));
    assert_eq!(config.chunk_size_kb, 16);
}

#[test]
fn test_load_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.json");
    fs::write(&path, r#"{"chunk_size_kb": 8}"#).unwrap();

    let config = RunConfig::load(&path).unwrap();

    assert_eq!(config.folder, PathBuf::from("./books"));
    assert_eq!(config.chunk_size_kb, 8);
}

#[test]
fn test_overrides_win_over_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.json");
    fs::write(&path, r#"{"folder": "/data/books", "chunk_size_kb": 16}"#).unwrap();

    let mut config = RunConfig::load(&path).unwrap();
    config.apply_overrides(None, Some(4));

    // Flag beats file; absent flags keep the file's values
    assert_eq!(config.folder, PathBuf::from("/data/books"));
    assert_eq!(config.chunk_size_kb, 4);
}

#[test]
fn test_overrides_apply_to_defaults() {
    let mut config = RunConfig::default();
    config.apply_overrides(Some(PathBuf::from("/elsewhere")), None);

    assert_eq!(config.folder, PathBuf::from("/elsewhere"));
    assert_eq!(config.chunk_size_kb, 64);
}

#[test]
fn test_load_malformed_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("run.json");
    fs::write(&path, "chunk_size_kb = 8").unwrap();

    assert!(RunConfig::load(&path).is_err());
}

#[test]
fn test_load_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();

    assert!(RunConfig::load(&dir.path().join("absent.json")).is_err());
}
