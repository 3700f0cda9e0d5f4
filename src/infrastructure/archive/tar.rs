//! System `tar` implementation of the Archiver port.

use std::ffi::OsString;
use std::fs::Permissions;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::NamedTempFile;

use crate::domain::ports::{ArchiveRequest, Archiver};
use crate::error::{ShipitError, ShipitResult};
use crate::infrastructure::process;

/// Archiver that shells out to `tar -czf`.
#[derive(Debug, Clone)]
pub struct TarArchiver {
    program: PathBuf,
}

impl Default for TarArchiver {
    fn default() -> Self {
        Self::new()
    }
}

impl TarArchiver {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("tar"),
        }
    }

    /// Use a specific tar executable
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one archive run writing to `archive`; `file_list` is
    /// the NUL-separated list.
    fn build_args(request: &ArchiveRequest<'_>, archive: &Path, file_list: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-czf".into(), archive.into()];

        for pattern in request.exclusions.patterns() {
            args.push("--exclude".into());
            args.push(pattern.into());
        }
        if let Some(from) = request.exclusions.exclude_from() {
            let mut opt = OsString::from("--exclude-from=");
            opt.push(from);
            args.push(opt);
        }

        args.push("--null".into());
        args.push("-T".into());
        args.push(file_list.into());
        args
    }

    /// Write the file list into a temp file that is removed when dropped.
    fn write_file_list(request: &ArchiveRequest<'_>) -> ShipitResult<NamedTempFile> {
        let mut list = tempfile::Builder::new()
            .prefix(".shipit-files-")
            .tempfile_in(request.scratch_dir)?;
        for file in request.files {
            list.write_all(file.as_os_str().as_bytes())?;
            list.write_all(b"\0")?;
        }
        list.flush()?;
        Ok(list)
    }

    /// Temp file next to the artifact; tar writes here and it only takes
    /// the artifact's name once tar succeeds.
    fn stage_output(output: &Path) -> ShipitResult<NamedTempFile> {
        let dir = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let staged = tempfile::Builder::new()
            .prefix(".shipit-artifact-")
            .suffix(".tgz")
            .permissions(Permissions::from_mode(0o644))
            .tempfile_in(dir)?;
        Ok(staged)
    }
}

impl Archiver for TarArchiver {
    fn create(&self, request: &ArchiveRequest<'_>) -> ShipitResult<()> {
        let list = Self::write_file_list(request)?;
        let staged = Self::stage_output(request.output)?;
        let failed = |message: String| ShipitError::ArchiveFailed {
            artifact: request.output.to_path_buf(),
            message,
        };

        let mut cmd = Command::new(&self.program);
        cmd.current_dir(request.root)
            .args(Self::build_args(request, staged.path(), list.path()));

        let output = process::capture(&mut cmd).map_err(|e| failed(e.to_string()))?;
        if !output.status.success() {
            return Err(failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        staged
            .persist(request.output)
            .map_err(|e| failed(e.error.to_string()))?;
        Ok(())
    }
}
