//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated parameter repository in a temporary directory and
//! command builders pointed at it.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated parameter repository.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Root of the parameter repository.
    pub repo: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty repository.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = temp_dir.path().join("params");
        fs::create_dir(&repo).expect("Failed to create repo dir");
        Self { temp_dir, repo }
    }

    /// Repository with two datacenters, environment overrides and a shared value.
    pub fn sample() -> Self {
        let env = Self::new();
        env.write("global.yml", "db:\n  host: 10.0.0.1\n  port: 5432\nlog_level: info\n");
        env.write("global-lab.yml", "log_level: debug\n");
        env.write("dc1/datacenter.yml", "db:\n  host: 10.0.0.1\nregion: east\n");
        env.write("dc1/datacenter-lab.yml", "region: east-lab\n");
        env.write("dc1/foundation1.yml", "name: foundation1\ndb:\n  port: 6432\n");
        env.write("dc2/foundation2.yml", "name: foundation2\n");
        env
    }

    /// Bare command without any arguments.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("paramtree").expect("Failed to find paramtree binary")
    }

    /// Command with the repository path already supplied.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env_remove("PARAMTREE_ENVIRONMENT")
            .env_remove("PARAMTREE_OUTPUT_FORMAT")
            .env_remove("PARAMTREE_EXTENSIONS")
            .env_remove("PARAMTREE_LOG_MODE")
            .arg(&self.repo);
        cmd
    }

    /// Write a repository file, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.repo.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, contents).expect("Failed to write fixture");
    }

    /// A path outside the repository for output files.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn path(&self) -> &Path {
        &self.repo
    }
}
