// Test utility module for irc-numerics integration tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("Failed to read fixture")
}

/// A scratch directory holding a copy of the fixture registry as numerics.yml
pub fn workspace_with_registry() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::copy(fixture("numerics.yml"), temp_dir.path().join("numerics.yml")).unwrap();
    temp_dir
}

/// The binary, run from `dir`
pub fn numerics_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("irc-numerics").expect("binary should be built");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}
