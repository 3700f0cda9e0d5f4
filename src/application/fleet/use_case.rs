//! Fleet Executor
//!
//! Walks the running instances of a region one host at a time and applies
//! a [`FleetAction`]. The first failing host aborts the walk; hosts already
//! processed keep whatever the action did to them.

use crate::domain::entities::{Instance, Uptime};
use crate::domain::ports::{InventoryProvider, RemoteSession, SessionFactory};
use crate::domain::value_objects::RemoteTarget;
use crate::error::{RemoteError, ShipitError, ShipitResult};

use super::action::{
    deploy_command, remote_script_path, restart_command, FleetAction, FleetEvent, FleetReport,
    InstanceStatus, UPTIME_COMMAND,
};

pub struct FleetExecutor<I, F>
where
    I: InventoryProvider,
    F: SessionFactory,
{
    inventory: I,
    sessions: F,
    user: String,
}

impl<I, F> FleetExecutor<I, F>
where
    I: InventoryProvider,
    F: SessionFactory,
{
    pub fn new(inventory: I, sessions: F, user: impl Into<String>) -> Self {
        Self {
            inventory,
            sessions,
            user: user.into(),
        }
    }

    /// Apply `action` to every running instance selected by `filter`.
    pub fn execute(
        &self,
        region: &str,
        filter: Option<&str>,
        action: &FleetAction,
        mut on_event: impl FnMut(FleetEvent),
    ) -> ShipitResult<FleetReport> {
        if let FleetAction::Deploy { script, .. } = action {
            if !script.is_file() {
                return Err(ShipitError::FileNotFound {
                    path: script.clone(),
                });
            }
        }

        let instances = self.inventory.running_instances(region)?;
        let mut report = FleetReport::default();

        for instance in instances {
            if !instance.matches_filter(filter) {
                report.skipped += 1;
                continue;
            }
            let Some(address) = instance.public_ip.clone() else {
                tracing::warn!(instance = %instance.id, "no public address, skipping");
                on_event(FleetEvent::HostUnreachable {
                    instance_id: instance.id.clone(),
                });
                report.unreachable.push(instance.id);
                continue;
            };

            on_event(FleetEvent::HostStarted {
                instance_id: instance.id.clone(),
                address: address.clone(),
            });

            let output = self
                .apply(&address, action)
                .map_err(|source| ShipitError::RemoteExecution {
                    host: address.clone(),
                    source,
                })?;

            tracing::info!(host = %address, action = action.name(), "host done");
            on_event(FleetEvent::HostFinished {
                instance_id: instance.id,
                address: address.clone(),
                output,
            });
            report.completed.push(address);
        }

        Ok(report)
    }

    /// Best-effort uptime of every selected instance.
    ///
    /// A host that cannot be probed gets `None`; only the inventory call
    /// itself can fail.
    pub fn probe_uptime(
        &self,
        region: &str,
        filter: Option<&str>,
    ) -> ShipitResult<Vec<InstanceStatus>> {
        let instances = self.inventory.running_instances(region)?;

        Ok(instances
            .into_iter()
            .filter(|i| i.matches_filter(filter))
            .map(|instance| {
                let uptime = self.probe(&instance);
                InstanceStatus { instance, uptime }
            })
            .collect())
    }

    fn probe(&self, instance: &Instance) -> Option<Uptime> {
        let address = instance.public_ip.as_deref()?;
        let result = self
            .sessions
            .open(&RemoteTarget::new(address, self.user.as_str()))
            .and_then(|session| session.run(UPTIME_COMMAND));

        match result {
            Ok(output) => Some(Uptime::new(&output.stdout)),
            Err(err) => {
                tracing::debug!(host = address, error = %err, "uptime probe failed");
                None
            }
        }
    }

    fn apply(&self, address: &str, action: &FleetAction) -> Result<String, RemoteError> {
        let session = self
            .sessions
            .open(&RemoteTarget::new(address, self.user.as_str()))?;

        let output = match action {
            FleetAction::Deploy {
                script,
                remote_dir,
                artifact_uri,
            } => {
                let remote_script = remote_script_path(script, remote_dir);
                session.put(script, &remote_script)?;
                session.run(&deploy_command(&remote_script, artifact_uri))?
            }
            FleetAction::Restart { service } => session.sudo(&restart_command(service))?,
        };

        Ok(output.stdout.trim_end().to_string())
    }
}
