//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DEFAULT_NAME_TEMPLATE;
use crate::error::ShipitResult;

use super::loader;

/// Artifact build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Directory artifacts (and the scoped file list) are written to
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,

    /// File name template with `{repo}` and `{branch}` placeholders
    #[serde(default = "default_name_template")]
    pub name_template: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
            name_template: default_name_template(),
        }
    }
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("/tmp")
}

fn default_name_template() -> String {
    DEFAULT_NAME_TEMPLATE.to_string()
}

/// Object storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Stack name, the first half of the `{stack}-{region}` key prefix
    #[serde(default = "default_stack")]
    pub stack: String,

    /// Region the bucket lives in. Unset means `AWS_REGION` /
    /// `AWS_DEFAULT_REGION`; the fleet region only shapes the key prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            stack: default_stack(),
            region: None,
        }
    }
}

fn default_bucket() -> String {
    "deploy-artifacts".to_string()
}

fn default_stack() -> String {
    "prod".to_string()
}

/// Fleet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
        }
    }
}

fn default_region() -> String {
    "us-west-1".to_string()
}

/// Remote session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Login user for every remote session
    #[serde(default = "default_user")]
    pub user: String,

    /// Local deploy script uploaded to each host
    #[serde(default = "default_deploy_script")]
    pub deploy_script: PathBuf,

    /// Remote directory the deploy script is copied into
    #[serde(default = "default_remote_script_dir")]
    pub remote_script_dir: String,

    /// Service restarted by `restart`
    #[serde(default = "default_service")]
    pub service: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            deploy_script: default_deploy_script(),
            remote_script_dir: default_remote_script_dir(),
            service: default_service(),
            connect_timeout_secs: default_connect_timeout(),
            command_timeout_secs: default_command_timeout(),
        }
    }
}

impl RemoteConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

fn default_user() -> String {
    "deploy".to_string()
}

fn default_deploy_script() -> PathBuf {
    PathBuf::from("deploy.sh")
}

fn default_remote_script_dir() -> String {
    "/tmp".to_string()
}

fn default_service() -> String {
    "app".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_command_timeout() -> u64 {
    300
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub artifact: ArtifactConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub fleet: FleetConfig,

    #[serde(default)]
    pub remote: RemoteConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ShipitResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }
}
