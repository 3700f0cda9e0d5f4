//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports, mostly thin wrappers
//! around external programs (`git`, `tar`, `aws`, `ssh`, `scp`) plus the
//! S3 object store client.

pub mod archive;
pub mod inventory;
pub(crate) mod process;
pub mod remote;
pub mod storage;
pub mod vcs;

pub use archive::TarArchiver;
pub use inventory::AwsCliInventory;
pub use remote::{SshOptions, SshSession, SshSessionFactory};
pub use storage::S3Storage;
pub use vcs::GitCli;
