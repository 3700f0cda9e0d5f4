//! EC2 inventory via the `aws` CLI.
//!
//! Credentials and profile selection come from the ambient AWS
//! environment; the CLI also follows pagination tokens on its own.

use std::path::PathBuf;
use std::process::Command;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::entities::Instance;
use crate::domain::ports::InventoryProvider;
use crate::error::{ShipitError, ShipitResult};
use crate::infrastructure::process;

/// Inventory provider running `aws ec2 describe-instances`.
#[derive(Debug, Clone)]
pub struct AwsCliInventory {
    program: PathBuf,
}

impl Default for AwsCliInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsCliInventory {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("aws"),
        }
    }

    fn describe_args(region: &str) -> Vec<String> {
        vec![
            "ec2".to_string(),
            "describe-instances".to_string(),
            "--region".to_string(),
            region.to_string(),
            "--filters".to_string(),
            "Name=instance-state-name,Values=running".to_string(),
            "--output".to_string(),
            "json".to_string(),
        ]
    }
}

impl InventoryProvider for AwsCliInventory {
    fn running_instances(&self, region: &str) -> ShipitResult<Vec<Instance>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::describe_args(region));

        let output = process::capture(&mut cmd)
            .map_err(|e| ShipitError::Provider(format!("could not run aws CLI: {e}")))?;
        if !output.status.success() {
            return Err(ShipitError::Provider(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let instances = parse_describe_instances(&output.stdout)?;
        tracing::debug!(region, count = instances.len(), "listed running instances");
        Ok(instances)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeInstancesOutput {
    #[serde(default)]
    reservations: Vec<Reservation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Reservation {
    #[serde(default)]
    instances: Vec<Ec2Instance>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Ec2Instance {
    instance_id: String,
    public_ip_address: Option<String>,
    launch_time: String,
    state: Option<Ec2State>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Ec2State {
    name: String,
}

/// Parse `describe-instances` JSON, keeping only running instances.
fn parse_describe_instances(raw: &[u8]) -> ShipitResult<Vec<Instance>> {
    let parsed: DescribeInstancesOutput = serde_json::from_slice(raw)
        .map_err(|e| ShipitError::Provider(format!("unexpected describe-instances output: {e}")))?;

    parsed
        .reservations
        .into_iter()
        .flat_map(|r| r.instances)
        .filter(|i| i.state.as_ref().is_none_or(|s| s.name == "running"))
        .map(|i| {
            let launch_time = DateTime::parse_from_rfc3339(&i.launch_time)
                .map_err(|e| {
                    ShipitError::Provider(format!(
                        "invalid launch time '{}' for {}: {e}",
                        i.launch_time, i.instance_id
                    ))
                })?
                .with_timezone(&Utc);
            Ok(Instance::new(i.instance_id, i.public_ip_address, launch_time))
        })
        .collect()
}
