//! Restart command handler

use anyhow::Result;

use shipit::application::FleetAction;

use super::{run_fleet, CommandContext};

/// Execute the restart command
pub fn cmd_restart(ctx: &CommandContext, region: Option<String>, ip: Option<&str>) -> Result<()> {
    let region = ctx.region(region);
    let action = FleetAction::Restart {
        service: ctx.config.remote.service.clone(),
    };
    run_fleet(ctx, &region, ip, &action)
}
