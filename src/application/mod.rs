//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT talk to git, tar, S3 or SSH directly
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildArtifactUseCase` - Snapshot a working tree into a gzip tarball
//! - `PublishArtifactUseCase` - Upload an artifact to object storage
//! - `InventoryQuery` - Running instances and their public addresses
//! - `FleetExecutor` - Deploy / restart / uptime across the fleet, host by host

pub mod build;
pub mod fleet;
pub mod inventory;
pub mod publish;

pub use build::{BuildArtifactUseCase, BuildOptions, BuildResult};
pub use fleet::{FleetAction, FleetEvent, FleetExecutor, FleetReport, InstanceStatus};
pub use inventory::InventoryQuery;
pub use publish::{PublishArtifactUseCase, PublishTarget};
