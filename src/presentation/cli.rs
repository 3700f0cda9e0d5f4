//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --config) are inherited by all subcommands.
//! `--region` falls back to the configured region when omitted.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// shipit - build, publish and roll out git artifacts to an EC2 fleet
#[derive(Parser, Debug)]
#[command(name = "shipit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to the nearest shipit.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package the tracked files of a git working tree into a tarball
    Build {
        /// Any directory inside the working tree (defaults to the current directory)
        path: Option<PathBuf>,
    },

    /// Run the deploy script on every running instance
    Deploy {
        /// AWS region of the fleet
        #[arg(short, long)]
        region: Option<String>,

        /// Artifact to deploy (defaults to the artifact built from the current tree)
        #[arg(short, long, value_name = "FILE")]
        artifact: Option<PathBuf>,

        /// Only deploy to the instance with this public IP
        #[arg(long)]
        ip: Option<String>,
    },

    /// List running instances
    Instances {
        /// AWS region of the fleet
        #[arg(short, long)]
        region: Option<String>,

        /// Also query each instance's uptime over SSH
        #[arg(long)]
        show_uptime: bool,
    },

    /// Print the public IP of every running instance, one per line
    Ips {
        /// AWS region of the fleet
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Restart the application service on running instances
    Restart {
        /// AWS region of the fleet
        #[arg(short, long)]
        region: Option<String>,

        /// Only restart the instance with this public IP
        #[arg(long)]
        ip: Option<String>,
    },

    /// Upload an artifact to the artifact bucket
    Upload {
        /// Local artifact file
        file: PathBuf,

        /// AWS region the artifact is published for
        #[arg(short, long)]
        region: Option<String>,
    },
}

impl Commands {
    /// Subcommand name as used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build { .. } => "build",
            Commands::Deploy { .. } => "deploy",
            Commands::Instances { .. } => "instances",
            Commands::Ips { .. } => "ips",
            Commands::Restart { .. } => "restart",
            Commands::Upload { .. } => "upload",
        }
    }
}
