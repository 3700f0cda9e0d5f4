//! Remote execution port
//!
//! Abstracts the remote shell used to act on fleet hosts, so the fleet
//! executor can be driven by a fake transport in tests.

use std::path::Path;

use crate::domain::value_objects::RemoteTarget;
use crate::error::RemoteError;

/// Captured result of a successful remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// An open session on one host.
pub trait RemoteSession {
    /// Run `command` as the login user
    fn run(&self, command: &str) -> Result<CommandOutput, RemoteError>;

    /// Run `command` with elevated privileges
    fn sudo(&self, command: &str) -> Result<CommandOutput, RemoteError>;

    /// Copy a local file to `remote_path` on the host
    fn put(&self, local: &Path, remote_path: &str) -> Result<(), RemoteError>;
}

/// Opens sessions to remote targets.
pub trait SessionFactory {
    type Session: RemoteSession;

    fn open(&self, target: &RemoteTarget) -> Result<Self::Session, RemoteError>;
}

impl<F: SessionFactory + ?Sized> SessionFactory for &F {
    type Session = F::Session;

    fn open(&self, target: &RemoteTarget) -> Result<Self::Session, RemoteError> {
        (**self).open(target)
    }
}
