//! Git CLI implementation of the VersionControl port.

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::ports::VersionControl;
use crate::error::{ShipitError, ShipitResult};
use crate::infrastructure::process;

/// Version control backed by the `git` binary on PATH.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn git(&self, dir: &Path, args: &[&str]) -> ShipitResult<Vec<u8>> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C").arg(dir).args(args);

        let output = process::capture(&mut cmd).map_err(|e| not_a_repo(dir, e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(not_a_repo(dir, stderr));
        }
        Ok(output.stdout)
    }
}

impl VersionControl for GitCli {
    fn toplevel(&self, dir: &Path) -> ShipitResult<PathBuf> {
        let out = self.git(dir, &["rev-parse", "--show-toplevel"])?;
        let top = out.strip_suffix(b"\n").unwrap_or(&out);
        if top.is_empty() {
            return Err(not_a_repo(dir, "empty top-level path".to_string()));
        }
        Ok(PathBuf::from(OsStr::from_bytes(top)))
    }

    fn current_branch(&self, root: &Path) -> ShipitResult<String> {
        let out = self.git(root, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(String::from_utf8_lossy(&out).trim().to_string())
    }

    fn tracked_files(&self, root: &Path) -> ShipitResult<Vec<PathBuf>> {
        let out = self.git(root, &["ls-files", "-z"])?;
        Ok(parse_nul_list(&out))
    }
}

fn not_a_repo(path: &Path, message: String) -> ShipitError {
    ShipitError::NotAGitRepository {
        path: path.to_path_buf(),
        message,
    }
}

/// Split NUL-terminated `git ls-files -z` output into paths, byte for byte.
fn parse_nul_list(raw: &[u8]) -> Vec<PathBuf> {
    raw.split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| PathBuf::from(OsStr::from_bytes(entry)))
        .collect()
}
