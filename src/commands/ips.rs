//! Ips command handler

use anyhow::Result;
use serde_json::json;

use shipit::presentation::factory;
use shipit::presentation::output;

use super::CommandContext;

/// Execute the ips command
pub fn cmd_ips(ctx: &CommandContext, region: Option<String>) -> Result<()> {
    let region = ctx.region(region);
    let ips = factory::create_inventory_query().ips(&region)?;

    if ctx.json() {
        output::emit(&json!({
            "event": "ips",
            "region": region,
            "ips": ips,
        }));
    } else {
        println!("{}", output::ips_line(&ips));
    }
    Ok(())
}
