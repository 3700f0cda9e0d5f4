//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    BuildArtifactUseCase, FleetExecutor, InventoryQuery, PublishArtifactUseCase, PublishTarget,
};
use crate::config::Config;
use crate::infrastructure::{
    AwsCliInventory, GitCli, S3Storage, SshOptions, SshSessionFactory, TarArchiver,
};

/// Type alias for the concrete build use case
pub type ConcreteBuildUseCase = BuildArtifactUseCase<GitCli, TarArchiver>;

/// Type alias for the concrete publish use case
pub type ConcretePublishUseCase = PublishArtifactUseCase<S3Storage>;

/// Type alias for the concrete fleet executor
pub type ConcreteFleetExecutor = FleetExecutor<AwsCliInventory, SshSessionFactory>;

/// Create a build use case backed by `git` and `tar`
pub fn create_build_use_case() -> ConcreteBuildUseCase {
    BuildArtifactUseCase::new(GitCli::new(), TarArchiver::new())
}

/// S3 storage for the configured bucket
///
/// Credentials come from the standard `AWS_*` environment.
pub fn create_storage(config: &Config) -> S3Storage {
    S3Storage::from_env(config.storage.region.clone())
}

/// Create a publish use case uploading to S3
pub fn create_publish_use_case(config: &Config) -> ConcretePublishUseCase {
    PublishArtifactUseCase::new(create_storage(config))
}

/// Publish target for `region` from the storage configuration
pub fn publish_target(config: &Config, region: &str) -> PublishTarget {
    PublishTarget {
        bucket: config.storage.bucket.clone(),
        stack: config.storage.stack.clone(),
        region: region.to_string(),
    }
}

/// Create an inventory query backed by the AWS CLI
pub fn create_inventory_query() -> InventoryQuery<AwsCliInventory> {
    InventoryQuery::new(AwsCliInventory::new())
}

/// Create a fleet executor using SSH with the configured user and timeouts
pub fn create_fleet_executor(config: &Config) -> ConcreteFleetExecutor {
    let options = SshOptions {
        connect_timeout: config.remote.connect_timeout(),
        command_timeout: config.remote.command_timeout(),
    };
    FleetExecutor::new(
        AwsCliInventory::new(),
        SshSessionFactory::new(options),
        config.remote.user.clone(),
    )
}
