//! shipit - build, publish and roll out git artifacts to an EC2 fleet
//!
//! shipit packages the tracked files of a git working tree into a gzip
//! tarball, uploads it to S3 under a `{stack}-{region}/` prefix, and drives
//! the running instances of a region over SSH: deploying an artifact,
//! restarting the service, or probing uptime.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use error::{RemoteError, ShipitError, ShipitResult};
