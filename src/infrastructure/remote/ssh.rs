//! SSH implementation of the remote execution port.
//!
//! Every call is a fresh `ssh`/`scp` process in batch mode, so a missing
//! key fails fast instead of hanging. Host keys of hosts not yet in
//! `known_hosts` are accepted on first contact; changed keys still fail.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use crate::domain::ports::{CommandOutput, RemoteSession, SessionFactory};
use crate::domain::value_objects::RemoteTarget;
use crate::error::RemoteError;
use crate::infrastructure::process;

/// Connection and command limits for SSH sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SshOptions {
    pub connect_timeout: Duration,
    pub command_timeout: Duration,
}

impl Default for SshOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            command_timeout: Duration::from_secs(300),
        }
    }
}

/// Opens [`SshSession`]s.
#[derive(Debug, Clone, Default)]
pub struct SshSessionFactory {
    options: SshOptions,
}

impl SshSessionFactory {
    pub fn new(options: SshOptions) -> Self {
        Self { options }
    }
}

impl SessionFactory for SshSessionFactory {
    type Session = SshSession;

    fn open(&self, target: &RemoteTarget) -> Result<SshSession, RemoteError> {
        tracing::debug!(target = %target, "opening ssh session");
        Ok(SshSession {
            target: target.clone(),
            options: self.options,
            ssh: PathBuf::from("ssh"),
            scp: PathBuf::from("scp"),
        })
    }
}

/// A logical session to one host.
#[derive(Debug, Clone)]
pub struct SshSession {
    target: RemoteTarget,
    options: SshOptions,
    ssh: PathBuf,
    scp: PathBuf,
}

impl SshSession {
    fn common_options(&self) -> Vec<String> {
        vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "StrictHostKeyChecking=accept-new".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.options.connect_timeout.as_secs().max(1)),
        ]
    }

    fn ssh_args(&self, command: &str) -> Vec<String> {
        let mut args = self.common_options();
        args.push(self.target.destination());
        args.push(command.to_string());
        args
    }

    fn scp_args(&self, local: &Path, remote_path: &str) -> Vec<String> {
        let mut args = self.common_options();
        args.push(local.to_string_lossy().into_owned());
        args.push(format!("{}:{}", self.target.destination(), remote_path));
        args
    }

    fn exec(&self, command: &str) -> Result<CommandOutput, RemoteError> {
        let mut cmd = Command::new(&self.ssh);
        cmd.args(self.ssh_args(command));
        let output = process::run_with_timeout(cmd, command, self.options.command_timeout)?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl RemoteSession for SshSession {
    fn run(&self, command: &str) -> Result<CommandOutput, RemoteError> {
        self.exec(command)
    }

    fn sudo(&self, command: &str) -> Result<CommandOutput, RemoteError> {
        // -n: never prompt, there is no tty to answer a password prompt
        self.exec(&format!("sudo -n {}", command))
    }

    fn put(&self, local: &Path, remote_path: &str) -> Result<(), RemoteError> {
        let mut cmd = Command::new(&self.scp);
        cmd.args(self.scp_args(local, remote_path));
        let label = format!("scp {} {}", local.display(), remote_path);
        process::run_with_timeout(cmd, &label, self.options.command_timeout)?;
        Ok(())
    }
}
