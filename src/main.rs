//! shipit CLI - build, publish and roll out git artifacts to an EC2 fleet
//!
//! Usage: shipit <COMMAND>
//!
//! Commands:
//!   build      Package the tracked files of a git working tree
//!   deploy     Run the deploy script on every running instance
//!   instances  List running instances
//!   ips        Print the public IPs of running instances
//!   restart    Restart the application service
//!   upload     Upload an artifact to the artifact bucket

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shipit::config;
use shipit::presentation::output;
use shipit::presentation::{Cli, Commands, OutputFormat};

mod commands;

use commands::CommandContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);
    let command = cli.command.name();

    match run(cli, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("{:#}", err);
            if format.is_json() {
                output::emit(&output::error_json(command, &message));
            } else {
                eprintln!("Error: {}", message);
            }
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli, format: OutputFormat) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let (config, warnings) = config::load_layered(cli.config.as_deref(), &cwd)?;
    for warning in &warnings {
        print_config_warning(warning, format);
    }

    let ctx = CommandContext::new(config, format, cwd);

    match cli.command {
        Commands::Build { path } => commands::build::cmd_build(&ctx, path.as_deref()),
        Commands::Deploy {
            region,
            artifact,
            ip,
        } => commands::deploy::cmd_deploy(&ctx, region, artifact.as_deref(), ip.as_deref()),
        Commands::Instances {
            region,
            show_uptime,
        } => commands::instances::cmd_instances(&ctx, region, show_uptime),
        Commands::Ips { region } => commands::ips::cmd_ips(&ctx, region),
        Commands::Restart { region, ip } => {
            commands::restart::cmd_restart(&ctx, region, ip.as_deref())
        }
        Commands::Upload { file, region } => commands::upload::cmd_upload(&ctx, &file, region),
    }
}

fn print_config_warning(warning: &config::ConfigWarning, format: OutputFormat) {
    if format.is_json() {
        output::emit(&serde_json::json!({
            "event": "config_warning",
            "key": warning.key,
            "file": warning.file.display().to_string(),
            "line": warning.line,
            "suggestion": warning.suggestion,
        }));
        return;
    }

    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => eprintln!(
            "Warning: unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => eprintln!("Warning: unknown config key '{}' in {}", warning.key, location),
    }
}
