//! Instances command handler
//!
//! Lists running instances, optionally probing each one's uptime.

use anyhow::Result;
use serde_json::json;

use shipit::presentation::factory;
use shipit::presentation::output;

use super::CommandContext;

/// Execute the instances command
pub fn cmd_instances(ctx: &CommandContext, region: Option<String>, show_uptime: bool) -> Result<()> {
    let region = ctx.region(region);

    if show_uptime {
        let statuses = factory::create_fleet_executor(&ctx.config).probe_uptime(&region, None)?;
        if ctx.json() {
            output::emit(&json!({
                "event": "instances",
                "region": region,
                "instances": statuses,
            }));
        } else {
            println!("{}", output::render_status_table(&statuses));
        }
        return Ok(());
    }

    let instances = factory::create_inventory_query().instances(&region)?;
    if ctx.json() {
        output::emit(&json!({
            "event": "instances",
            "region": region,
            "instances": instances,
        }));
    } else {
        println!("{}", output::render_instances_table(&instances));
    }
    Ok(())
}
