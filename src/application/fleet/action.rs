//! Fleet actions and the remote commands they run.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::{Instance, Uptime};

/// Uptime probe command
pub const UPTIME_COMMAND: &str = "uptime";

/// Action applied to every selected host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetAction {
    /// Upload `script`, then run it with `artifact_uri` as its only argument
    Deploy {
        script: PathBuf,
        remote_dir: String,
        artifact_uri: String,
    },
    /// Restart `service` with elevated privileges
    Restart { service: String },
}

impl FleetAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Deploy { .. } => "deploy",
            Self::Restart { .. } => "restart",
        }
    }
}

/// Remote location the deploy script is uploaded to
pub fn remote_script_path(script: &Path, remote_dir: &str) -> String {
    let name = script
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "deploy.sh".to_string());
    format!("{}/{}", remote_dir.trim_end_matches('/'), name)
}

pub fn deploy_command(remote_script: &str, artifact_uri: &str) -> String {
    format!("bash {} {}", shell_quote(remote_script), shell_quote(artifact_uri))
}

pub fn restart_command(service: &str) -> String {
    format!("systemctl restart {}", shell_quote(service))
}

/// Quote a string for safe use as one POSIX shell word
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Progress notifications emitted while walking the fleet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetEvent {
    HostStarted { instance_id: String, address: String },
    HostFinished {
        instance_id: String,
        address: String,
        output: String,
    },
    /// Instance selected but without a public address to connect to
    HostUnreachable { instance_id: String },
}

/// Summary of a fleet-wide action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetReport {
    /// Addresses the action completed on, in processing order
    pub completed: Vec<String>,
    /// Instances not selected by the address filter
    pub skipped: usize,
    /// Selected instances that had no public address
    pub unreachable: Vec<String>,
}

impl FleetReport {
    pub fn is_noop(&self) -> bool {
        self.completed.is_empty()
    }
}

/// One row of the uptime listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceStatus {
    #[serde(flatten)]
    pub instance: Instance,
    /// Absent when the probe failed for this host
    pub uptime: Option<Uptime>,
}
