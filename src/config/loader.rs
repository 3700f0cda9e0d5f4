//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ShipitError, ShipitResult};

use super::types::Config;

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "shipit.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShipitResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML `content` that was read from `path`.
pub fn parse_with_warnings(content: &str, path: &Path) -> ShipitResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShipitError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the nearest `shipit.toml` walking upward from `start`.
pub fn discover_project_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// Resolve the configuration for one invocation.
///
/// The first file found wins: `explicit` (must exist), the nearest
/// project `shipit.toml`, then the user config. Environment overrides are
/// applied on top of whichever source was used.
pub fn load_layered(
    explicit: Option<&Path>,
    cwd: &Path,
) -> ShipitResult<(Config, Vec<ConfigWarning>)> {
    let source = match explicit {
        Some(path) if !path.is_file() => {
            return Err(ShipitError::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => discover_project_config(cwd).or_else(|| {
            user_config_path().filter(|p| p.is_file())
        }),
    };

    let (config, warnings) = match source {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (SHIPIT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides using `lookup` as the environment.
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(region) = non_empty("SHIPIT_REGION") {
        config.fleet.region = region;
    }
    if let Some(bucket) = non_empty("SHIPIT_BUCKET") {
        config.storage.bucket = bucket;
    }
    if let Some(stack) = non_empty("SHIPIT_STACK") {
        config.storage.stack = stack;
    }
    if let Some(region) = non_empty("SHIPIT_BUCKET_REGION") {
        config.storage.region = Some(region);
    }
    if let Some(dir) = non_empty("SHIPIT_TEMP_DIR") {
        config.artifact.temp_dir = PathBuf::from(dir);
    }
    if let Some(user) = non_empty("SHIPIT_DEPLOY_USER") {
        config.remote.user = user;
    }
    if let Some(service) = non_empty("SHIPIT_SERVICE") {
        config.remote.service = service;
    }

    config
}

/// User configuration path (`$XDG_CONFIG_HOME/shipit/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .map(|dir| dir.join("shipit").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "artifact",
        "temp_dir",
        "name_template",
        "storage",
        "bucket",
        "stack",
        "fleet",
        "region",
        "remote",
        "user",
        "deploy_script",
        "remote_script_dir",
        "service",
        "connect_timeout_secs",
        "command_timeout_secs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
