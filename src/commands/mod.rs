//! Command handlers
//!
//! Each handler wires a use case from the factory, runs it and renders the
//! result as human status lines or JSON events.

use std::path::{Path, PathBuf};

use anyhow::Result;

use shipit::application::{BuildOptions, FleetAction};
use shipit::config::Config;
use shipit::presentation::factory;
use shipit::presentation::output::{self, OutputFormat};

pub mod build;
pub mod deploy;
pub mod instances;
pub mod ips;
pub mod restart;
pub mod upload;

/// Settings shared by every command invocation
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub cwd: PathBuf,
}

impl CommandContext {
    pub fn new(config: Config, format: OutputFormat, cwd: PathBuf) -> Self {
        Self {
            config,
            format,
            cwd,
        }
    }

    pub fn json(&self) -> bool {
        self.format.is_json()
    }

    /// `--region` if given, else the configured region
    pub fn region(&self, flag: Option<String>) -> String {
        flag.unwrap_or_else(|| self.config.fleet.region.clone())
    }

    /// Relative paths are taken from the current directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    pub fn build_options(&self, path: PathBuf) -> BuildOptions {
        BuildOptions {
            path,
            temp_dir: self.resolve(&self.config.artifact.temp_dir),
            name_template: self.config.artifact.name_template.clone(),
        }
    }
}

/// Run `action` across the fleet, streaming one line per host event.
pub(crate) fn run_fleet(
    ctx: &CommandContext,
    region: &str,
    ip: Option<&str>,
    action: &FleetAction,
) -> Result<()> {
    let executor = factory::create_fleet_executor(&ctx.config);
    let name = action.name();
    let json = ctx.json();

    let report = executor.execute(region, ip, action, |event| {
        if json {
            output::emit(&output::fleet_event_json(name, &event));
        } else {
            println!("{}", output::fleet_event_line(name, &event));
        }
    })?;

    if json {
        output::emit(&output::fleet_summary_json(name, &report));
    } else {
        println!("{}", output::fleet_summary_line(name, &report, ip));
    }
    Ok(())
}
