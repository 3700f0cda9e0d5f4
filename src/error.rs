//! Error types for shipit
//!
//! Library code returns [`ShipitResult`]; the binary layer wraps these in
//! `anyhow` for reporting.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for shipit operations
pub type ShipitResult<T> = Result<T, ShipitError>;

/// Main error type for shipit operations
#[derive(Error, Debug)]
pub enum ShipitError {
    /// Build input path is missing or not a directory
    #[error("the path {path} does not appear to be a directory")]
    NotADirectory { path: PathBuf },

    /// Build input path is not inside a git working tree
    #[error("the directory {path} does not appear to have a git repository")]
    NotAGitRepository { path: PathBuf, message: String },

    /// Artifact name would not be a single file inside the temp directory
    #[error("artifact name '{name}' is not a plain file name")]
    InvalidArtifactName { name: String },

    /// A local file required by the operation does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The archiver exited unsuccessfully
    #[error("failed to create archive {artifact}: {message}")]
    ArchiveFailed { artifact: PathBuf, message: String },

    /// The cloud inventory provider call failed
    #[error("provider error: {0}")]
    Provider(String),

    /// Object storage upload failed
    #[error("storage error: {0}")]
    Storage(String),

    /// A remote command failed on a specific host
    #[error("remote execution failed on {host}: {source}")]
    RemoteExecution {
        host: String,
        #[source]
        source: RemoteError,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the remote transport for a single host
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The transport program could not be spawned
    #[error("could not start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited unsuccessfully
    #[error("command `{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The command did not finish in time and was killed
    #[error("command `{command}` timed out after {}s", timeout.as_secs())]
    Timeout { command: String, timeout: Duration },

    /// IO error while talking to the child process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
