//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archiver;
pub mod inventory;
pub mod remote;
pub mod storage;
pub mod version_control;

pub use archiver::{ArchiveRequest, Archiver};
pub use inventory::InventoryProvider;
pub use remote::{CommandOutput, RemoteSession, SessionFactory};
pub use storage::StorageProvider;
pub use version_control::VersionControl;
