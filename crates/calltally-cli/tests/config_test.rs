mod common;
use common::TestFixture;

use predicates::prelude::*;
use std::fs;

/// Test: calltally.toml in the working directory relocates inputs and
/// switches the line terminator
#[test]
fn test_config_file_is_picked_up() {
    let fixture = TestFixture::new();
    let data_dir = fixture.root().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("people.csv"), common::USERS_CSV).unwrap();
    fs::write(data_dir.join("calls.csv"), common::CALL_LOGS_CSV).unwrap();

    fs::write(
        fixture.root().join("calltally.toml"),
        r#"
[paths]
users = "data/people.csv"
call_logs = "data/calls.csv"
user_analytics = "data/analytics.csv"

[output]
line_terminator = "lf"
"#,
    )
    .unwrap();

    fixture.command().assert().success();

    let analytics = fs::read_to_string(data_dir.join("analytics.csv")).unwrap();
    assert_eq!(analytics, "userId,avgDuration,numCalls\n1,22.5,2\n2,19.0,3\n");

    // Not configured, so the default location is used
    assert!(fixture.resource("orderedCalls.csv").exists());
}

/// Test: default output uses CRLF line endings
#[test]
fn test_default_line_terminator_is_crlf() {
    let fixture = TestFixture::with_inputs();

    fixture.command().assert().success();

    let analytics = fixture.read_resource("userAnalytics.csv");
    assert!(analytics.starts_with("userId,avgDuration,numCalls\r\n"));
}

/// Test: a malformed config file is fatal
#[test]
fn test_malformed_config_fails() {
    let fixture = TestFixture::with_inputs();
    let config_path = fixture.root().join("custom.toml");
    fs::write(&config_path, "[paths\nusers = 1").unwrap();

    fixture
        .command()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config"));
}
