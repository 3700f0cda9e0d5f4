//! Deploy command handler
//!
//! Runs the deploy script on each selected instance, pointing it at the
//! storage location the artifact was (or will be) uploaded to.

use std::path::Path;

use anyhow::{Context, Result};

use shipit::application::FleetAction;
use shipit::presentation::factory;

use super::{run_fleet, CommandContext};

/// Execute the deploy command
pub fn cmd_deploy(
    ctx: &CommandContext,
    region: Option<String>,
    artifact: Option<&Path>,
    ip: Option<&str>,
) -> Result<()> {
    let region = ctx.region(region);

    let artifact = match artifact {
        Some(path) => ctx.resolve(path),
        None => factory::create_build_use_case()
            .planned_artifact(&ctx.build_options(ctx.cwd.clone()))
            .context("cannot derive the artifact to deploy; pass --artifact")?,
    };
    let location = factory::publish_target(&ctx.config, &region).location_for(&artifact)?;
    tracing::info!(artifact = %location, region = %region, "deploying");

    let action = FleetAction::Deploy {
        script: ctx.resolve(&ctx.config.remote.deploy_script),
        remote_dir: ctx.config.remote.remote_script_dir.clone(),
        artifact_uri: location.uri(),
    };
    run_fleet(ctx, &region, ip, &action)
}
