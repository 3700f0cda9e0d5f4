//! Child process helpers shared by the CLI-backed adapters.

use std::process::{Command, Output, Stdio};
use std::time::Duration;

use tokio::time::timeout;

use crate::error::RemoteError;

/// Human-readable form of a command for logs and error messages
pub fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `cmd` to completion, capturing stdout and stderr.
pub fn capture(cmd: &mut Command) -> std::io::Result<Output> {
    tracing::debug!(command = %describe(cmd), "running");
    cmd.stdin(Stdio::null()).output()
}

/// Run `cmd`, killing it if it is still running after `limit`.
///
/// A non-zero exit is returned as `RemoteError::CommandFailed`; `label`
/// names the command in errors.
pub fn run_with_timeout(cmd: Command, label: &str, limit: Duration) -> Result<Output, RemoteError> {
    tracing::debug!(command = %describe(&cmd), timeout_secs = limit.as_secs(), "running");

    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut cmd = tokio::process::Command::from(cmd);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let output = runtime.block_on(wait_with_limit(cmd, program, label, limit))?;

    if !output.status.success() {
        return Err(RemoteError::CommandFailed {
            command: label.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output)
}

async fn wait_with_limit(
    mut cmd: tokio::process::Command,
    program: String,
    label: &str,
    limit: Duration,
) -> Result<Output, RemoteError> {
    let child = cmd
        .spawn()
        .map_err(|source| RemoteError::Spawn { program, source })?;

    // Dropping the pending wait on expiry kills the child
    match timeout(limit, child.wait_with_output()).await {
        Ok(output) => Ok(output?),
        Err(_) => {
            tracing::warn!(command = label, timeout_secs = limit.as_secs(), "command timed out");
            Err(RemoteError::Timeout {
                command: label.to_string(),
                timeout: limit,
            })
        }
    }
}
