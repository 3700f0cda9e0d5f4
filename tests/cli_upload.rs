//! `shipit upload` failure paths that never reach the network.

mod common;

use common::*;

#[test]
fn upload_of_missing_file_fails() {
    let env = TestEnv::new();

    let result = env.run(&["upload", "missing.tgz"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("file not found"), "{}", result.stderr);
    assert!(result.stderr.contains("missing.tgz"), "{}", result.stderr);
}

#[test]
fn upload_of_missing_file_reports_json_error() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "upload", "missing.tgz"]);

    assert_eq!(result.exit_code, 1);
    let events = result.json_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "error");
    assert_eq!(events[0]["command"], "upload");
    assert!(events[0]["message"]
        .as_str()
        .unwrap()
        .contains("file not found"));
}

#[test]
fn upload_requires_a_file_argument() {
    let env = TestEnv::new();

    let result = env.run(&["upload"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("<FILE>"), "{}", result.stderr);
}
