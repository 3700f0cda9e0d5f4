//! Compute instance entity as reported by the inventory provider.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A running compute instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    pub id: String,
    /// Public address, absent for instances without a public interface
    pub public_ip: Option<String>,
    pub launch_time: DateTime<Utc>,
}

impl Instance {
    pub fn new(
        id: impl Into<String>,
        public_ip: Option<String>,
        launch_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            public_ip,
            launch_time,
        }
    }

    /// Whether this instance is selected by an optional address filter.
    ///
    /// No filter selects every instance; a filter never selects an
    /// instance without a public address.
    pub fn matches_filter(&self, filter: Option<&str>) -> bool {
        match filter {
            None => true,
            Some(ip) => self.public_ip.as_deref() == Some(ip),
        }
    }

    /// Launch time truncated to the minute, e.g. `2024-03-01 09:15`
    pub fn launch_time_display(&self) -> String {
        self.launch_time.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Output of the uptime probe for one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Uptime(String);

impl Uptime {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
