//! Test environment builder for isolated shipit testing.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a shipit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as one JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not a JSON line ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
///
/// Provides:
/// - Isolated project directory
/// - Isolated home directory, so no user config leaks in
/// - A dedicated artifact directory (`SHIPIT_TEMP_DIR`)
pub struct TestEnv {
    /// Temporary directory for the project
    pub project_root: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    /// Directory artifacts are written to
    pub artifacts: TempDir,
    shipit_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            home_dir: tempfile::tempdir().expect("Failed to create home dir"),
            artifacts: tempfile::tempdir().expect("Failed to create artifact dir"),
            shipit_bin: PathBuf::from(env!("CARGO_BIN_EXE_shipit")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to the artifact directory
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.artifacts.path().join(name)
    }

    /// Names of everything written to the artifact directory
    pub fn artifact_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.artifacts.path())
            .expect("Failed to read artifact dir")
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Run shipit from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    /// Run shipit from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(&self.shipit_bin);
        cmd.args(args)
            .current_dir(cwd)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("SHIPIT_TEMP_DIR", self.artifacts.path())
            .env_remove("SHIPIT_REGION")
            .env_remove("SHIPIT_BUCKET")
            .env_remove("SHIPIT_STACK")
            .env_remove("SHIPIT_BUCKET_REGION")
            .env_remove("SHIPIT_DEPLOY_USER")
            .env_remove("SHIPIT_SERVICE")
            .env_remove("RUST_LOG");

        let output = cmd.output().expect("Failed to run shipit");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
