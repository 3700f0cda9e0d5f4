//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_name;
mod exclusions;
mod remote_target;
mod storage_key;

pub use artifact_name::{ArtifactName, DEFAULT_NAME_TEMPLATE};
pub use exclusions::{ExclusionRules, VCS_EXCLUDES};
pub use remote_target::RemoteTarget;
pub use storage_key::{StorageKey, StorageLocation};
