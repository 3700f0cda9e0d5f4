//! Output Rendering
//!
//! Human-readable tables and status lines, and the JSON event lines
//! emitted under `--json`.

use serde_json::{json, Value};

use crate::application::{FleetEvent, FleetReport, InstanceStatus};
use crate::domain::entities::Instance;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

const ABSENT: &str = "-";

fn row(id: &str, ip: &str, launch: &str) -> String {
    format!("{:>20}  {:16}  {}", id, ip, launch)
}

fn row_with_uptime(id: &str, ip: &str, launch: &str, uptime: &str) -> String {
    format!("{:>20}  {:16}  {:16}  {}", id, ip, launch, uptime)
}

/// Instance table: ID, public IP and launch time, one instance per line.
pub fn render_instances_table(instances: &[Instance]) -> String {
    let mut lines = vec![row("Instance ID", "Public IP", "Launch Time")];
    lines.extend(instances.iter().map(|i| {
        row(
            &i.id,
            i.public_ip.as_deref().unwrap_or(ABSENT),
            &i.launch_time_display(),
        )
    }));
    lines.join("\n")
}

/// Instance table with an extra uptime column; failed probes show `-`.
pub fn render_status_table(statuses: &[InstanceStatus]) -> String {
    let mut lines = vec![row_with_uptime(
        "Instance ID",
        "Public IP",
        "Launch Time",
        "Uptime",
    )];
    lines.extend(statuses.iter().map(|s| {
        row_with_uptime(
            &s.instance.id,
            s.instance.public_ip.as_deref().unwrap_or(ABSENT),
            &s.instance.launch_time_display(),
            s.uptime.as_ref().map(|u| u.as_str()).unwrap_or(ABSENT),
        )
    }));
    lines.join("\n")
}

/// Public IPs on one space-separated line, ready for `$(shipit ips)`.
pub fn ips_line(ips: &[String]) -> String {
    ips.join(" ")
}

/// Human status line for one fleet event.
pub fn fleet_event_line(action: &str, event: &FleetEvent) -> String {
    match event {
        FleetEvent::HostStarted {
            instance_id,
            address,
        } => format!("→ {} {} ({})", action, address, instance_id),
        FleetEvent::HostFinished {
            address, output, ..
        } if output.is_empty() => format!("✓ {} {}", action, address),
        FleetEvent::HostFinished {
            address, output, ..
        } => format!("✓ {} {}\n{}", action, address, output),
        FleetEvent::HostUnreachable { instance_id } => {
            format!("○ {} has no public IP, skipped", instance_id)
        }
    }
}

/// Closing line of a fleet-wide action.
pub fn fleet_summary_line(action: &str, report: &FleetReport, filter: Option<&str>) -> String {
    if report.is_noop() {
        return match filter {
            Some(ip) => format!("No running instance with public IP {}; nothing to {}", ip, action),
            None => format!("No reachable running instances; nothing to {}", action),
        };
    }
    let mut line = format!("✓ {} complete on {} host(s)", action, report.completed.len());
    if !report.unreachable.is_empty() {
        line.push_str(&format!(", {} without public IP", report.unreachable.len()));
    }
    line
}

/// JSON line for one fleet event.
pub fn fleet_event_json(action: &str, event: &FleetEvent) -> Value {
    match event {
        FleetEvent::HostStarted {
            instance_id,
            address,
        } => json!({
            "event": "host_started",
            "action": action,
            "instance_id": instance_id,
            "address": address,
        }),
        FleetEvent::HostFinished {
            instance_id,
            address,
            output,
        } => json!({
            "event": "host_finished",
            "action": action,
            "instance_id": instance_id,
            "address": address,
            "output": output,
        }),
        FleetEvent::HostUnreachable { instance_id } => json!({
            "event": "host_unreachable",
            "action": action,
            "instance_id": instance_id,
        }),
    }
}

/// Closing JSON line of a fleet-wide action.
pub fn fleet_summary_json(action: &str, report: &FleetReport) -> Value {
    json!({
        "event": action,
        "status": "success",
        "completed": report.completed,
        "skipped": report.skipped,
        "unreachable": report.unreachable,
    })
}

/// JSON line reported when a command fails.
pub fn error_json(command: &str, message: &str) -> Value {
    json!({
        "event": "error",
        "command": command,
        "message": message,
    })
}

/// Print one JSON event line to stdout.
pub fn emit(value: &Value) {
    println!("{}", value);
}
