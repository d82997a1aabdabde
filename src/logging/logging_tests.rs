//! Tests for logging initialization.

use super::*;
use serial_test::serial;
use std::fs;

#[test]
fn log_target_splits_directory_and_file() {
    let (directory, file) = log_target(Path::new("/var/tmp/stickyband/app.log")).unwrap();
    assert_eq!(directory, PathBuf::from("/var/tmp/stickyband"));
    assert_eq!(file, "app.log");
}

#[test]
fn log_target_bare_file_uses_current_directory() {
    let (directory, file) = log_target(Path::new("app.log")).unwrap();
    assert_eq!(directory, PathBuf::from("."));
    assert_eq!(file, "app.log");
}

#[test]
fn log_target_rejects_path_without_file_name() {
    let result = log_target(Path::new("/"));
    assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
}

#[test]
fn invalid_path_error_names_the_path() {
    let err = LoggingError::InvalidPath(PathBuf::from("/"));
    assert!(err.to_string().contains("\"/\""));
}

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = std::env::temp_dir().join("stickyband_test_logs_create");
    let log_file = test_dir.join("test.log");
    let _ = fs::remove_dir_all(&test_dir);

    // The subscriber may already be installed by another test; the directory
    // is created before that check.
    let _ = init(&log_file);

    assert!(
        test_dir.exists(),
        "Log directory should be created: {:?}",
        test_dir
    );

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn second_init_reports_subscriber_already_set() {
    let test_dir = std::env::temp_dir().join("stickyband_test_logs_twice");
    let log_file = test_dir.join("twice.log");

    let _ = init(&log_file);
    let second = init(&log_file);
    assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));

    let _ = fs::remove_dir_all(&test_dir);
}
