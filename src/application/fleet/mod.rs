//! Fleet Module
//!
//! Remote actions across the running instances of a region.
//!
//! ## Structure
//!
//! - `action` - Actions, remote command construction, events and reports
//! - `use_case` - The sequential executor (`FleetExecutor`)

mod action;
mod use_case;

pub use action::{
    deploy_command, remote_script_path, restart_command, shell_quote, FleetAction, FleetEvent,
    FleetReport, InstanceStatus, UPTIME_COMMAND,
};
pub use use_case::FleetExecutor;
