//! Build command handler
//!
//! Packages the tracked files of the working tree into the temp directory.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use shipit::presentation::factory;
use shipit::presentation::output;

use super::CommandContext;

/// Execute the build command
pub fn cmd_build(ctx: &CommandContext, path: Option<&Path>) -> Result<()> {
    let path = path.map_or_else(|| ctx.cwd.clone(), |p| ctx.resolve(p));
    let options = ctx.build_options(path);

    let result = factory::create_build_use_case().execute(&options)?;

    if ctx.json() {
        output::emit(&json!({
            "event": "build",
            "status": "success",
            "artifact": result.artifact.display().to_string(),
            "repo": result.tree.repo_name(),
            "branch": result.tree.branch(),
            "files": result.file_count(),
        }));
    } else {
        println!(
            "✓ Built {} from {}@{} ({} files)",
            result.artifact.display(),
            result.tree.repo_name(),
            result.tree.branch(),
            result.file_count()
        );
    }
    Ok(())
}
