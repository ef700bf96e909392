mod common;
use common::TestFixture;

use predicates::prelude::*;

/// Test: dump prints stored rows and writes no reports
#[test]
fn test_dump_lists_rows() {
    let fixture = TestFixture::with_inputs();

    fixture
        .command()
        .arg("dump")
        .assert()
        .success()
        .stdout(predicate::str::contains("USERS (2)"))
        .stdout(predicate::str::contains("CALL LOGS (5)"))
        .stdout(predicate::str::contains("Jo Lee"))
        .stdout(predicate::str::contains("Smith").not());

    assert!(!fixture.resource("userAnalytics.csv").exists());
    assert!(!fixture.resource("orderedCalls.csv").exists());
}

/// Test: dump in JSON keeps insertion order and assigned ids
#[test]
fn test_dump_json() {
    let fixture = TestFixture::with_inputs();

    let output = fixture
        .command()
        .args(["dump", "--format", "json"])
        .output()
        .expect("Failed to run dump");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Parse failed");
    let users = value["users"].as_array().expect("Expected users array");
    let calls = value["call_logs"].as_array().expect("Expected call_logs array");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["user_id"], 1);
    assert_eq!(users[0]["first_name"], "Jo");
    assert_eq!(users[1]["last_name"], "Park");

    assert_eq!(calls.len(), 5);
    assert_eq!(calls[2]["call_id"], 3);
    assert_eq!(calls[2]["phone_number"], "557");
}
