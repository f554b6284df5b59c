use std::path::PathBuf;

use super::*;

fn not_found() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found")
}

#[test]
fn error_display_config() {
    let err = CocoError::Config("bad format in --multi".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad format in --multi");
}

#[test]
fn error_display_source_open() {
    let err = CocoError::SourceOpen {
        path: PathBuf::from("missing.c"),
        source: not_found(),
    };
    assert!(err.to_string().contains("missing.c"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(CocoError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        CocoError::SourceOpen {
            path: PathBuf::from("a"),
            source: not_found(),
        }
        .error_type(),
        "Open"
    );
    assert_eq!(
        CocoError::SourceRead {
            path: PathBuf::from("a"),
            source: not_found(),
        }
        .error_type(),
        "Read"
    );
    assert_eq!(CocoError::Io(not_found()).error_type(), "IO");
}

#[test]
fn message_names_the_file() {
    let err = CocoError::SourceRead {
        path: PathBuf::from("src/lib.c"),
        source: not_found(),
    };
    assert_eq!(err.message(), "error reading src/lib.c");
}

#[test]
fn detail_carries_io_cause() {
    let err = CocoError::SourceOpen {
        path: PathBuf::from("gone.txt"),
        source: not_found(),
    };
    assert_eq!(err.detail().as_deref(), Some("file not found"));
}

#[test]
fn config_error_has_no_detail_but_suggests_format() {
    let err = CocoError::Config("x".to_string());
    assert!(err.detail().is_none());
    assert!(err.suggestion().unwrap().contains("/* */"));
}

#[test]
fn toml_error_converts_via_from() {
    let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
    let err: CocoError = toml_err.into();
    assert_eq!(err.error_type(), "Config");
    assert!(err.detail().is_some());
}

#[test]
fn source_errors_have_no_suggestion() {
    let err = CocoError::SourceOpen {
        path: PathBuf::from("a"),
        source: not_found(),
    };
    assert!(err.suggestion().is_none());
}
