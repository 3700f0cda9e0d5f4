//! Upload command handler

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use shipit::presentation::factory;
use shipit::presentation::output;

use super::CommandContext;

/// Execute the upload command
pub fn cmd_upload(ctx: &CommandContext, file: &Path, region: Option<String>) -> Result<()> {
    let region = ctx.region(region);
    let file = ctx.resolve(file);
    let target = factory::publish_target(&ctx.config, &region);

    let location = factory::create_publish_use_case(&ctx.config).execute(&file, &target)?;

    if ctx.json() {
        output::emit(&json!({
            "event": "upload",
            "status": "success",
            "file": file.display().to_string(),
            "location": location.uri(),
        }));
    } else {
        println!("✓ Uploaded {} to {}", file.display(), location);
    }
    Ok(())
}
