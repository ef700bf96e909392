//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const USERS_CSV: &str = "firstName,lastName\n  Jo ,Lee\n,Smith\nA,B,C\nSam,Park\n";

pub const CALL_LOGS_CSV: &str = "phoneNumber,startTime,endTime,direction,userId\n\
555,10,50,OUT,1\n\
555,x,50,OUT,1\n\
556,100,130,IN,2\n\
557,5,25,OUT,2\n\
558,200,205,IN,1\n\
559,0,7,IN,2\n";

/// A scratch working directory laid out like a project checkout, with the
/// CSV inputs under `resources/`.
pub struct TestFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        fs::create_dir_all(root.join("resources")).expect("Failed to create resources dir");

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Fixture with the standard users and call log inputs in place.
    pub fn with_inputs() -> Self {
        let fixture = Self::new();
        fixture.write_resource("users.csv", USERS_CSV);
        fixture.write_resource("callLogs.csv", CALL_LOGS_CSV);
        fixture
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resource(&self, name: &str) -> PathBuf {
        self.root.join("resources").join(name)
    }

    pub fn write_resource(&self, name: &str, content: &str) {
        fs::write(self.resource(name), content).expect("Failed to write resource");
    }

    pub fn read_resource(&self, name: &str) -> String {
        fs::read_to_string(self.resource(name)).expect("Failed to read resource")
    }

    /// Command running in the fixture root, so the default relative paths
    /// resolve to the fixture's `resources/` directory.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("calltally");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }
}
