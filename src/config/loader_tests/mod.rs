use std::path::Path;

use super::*;
use crate::output::OutputFormat;

mod mock_fs;

use mock_fs::MockFileSystem;

#[test]
fn load_returns_default_when_no_config() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn load_discovers_local_config() {
    let fs = MockFileSystem::new().with_file(
        "/project/.coco.toml",
        "[comments]\nsingle = \"#\"\nmulti = \"\"\n",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.comments.single.as_deref(), Some("#"));
    assert_eq!(config.comments.multi.as_deref(), Some(""));
}

#[test]
fn load_uses_current_dir() {
    let fs = MockFileSystem::new()
        .with_current_dir("/elsewhere")
        .with_file("/project/.coco.toml", "[output]\nverbose = true\n");
    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new().with_file("/cfg/coco.toml", "[output]\nformat = \"json\"\n");
    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg/coco.toml"))
        .unwrap();

    assert_eq!(config.output.format, Some(OutputFormat::Json));
}

#[test]
fn load_from_missing_path_is_config_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert!(matches!(err, CocoError::ConfigRead { .. }));
    assert!(err.message().contains("/nope.toml"));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.coco.toml", "[comments\nsingle = 1");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, CocoError::TomlParse(_)));
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn wrong_value_type_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.coco.toml", "[output]\nverbose = \"yes\"\n");
    assert!(FileConfigLoader::with_fs(fs).load().is_err());
}
