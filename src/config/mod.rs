//! Configuration module for shipit
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SHIPIT_*)
//! 3. Project config (nearest `shipit.toml`) or `--config <PATH>`
//! 4. User config (~/.config/shipit/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover_project_config, load_layered, load_with_warnings, parse_with_warnings,
    user_config_path, with_env_overrides, with_overrides_from, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{ArtifactConfig, Config, FleetConfig, RemoteConfig, StorageConfig};
