//! Publish Artifact Use Case - uploads a local artifact to object storage.

use std::path::Path;

use crate::domain::ports::StorageProvider;
use crate::domain::value_objects::{StorageKey, StorageLocation};
use crate::error::{ShipitError, ShipitResult};

/// Where published artifacts live
#[derive(Debug, Clone)]
pub struct PublishTarget {
    pub bucket: String,
    pub stack: String,
    pub region: String,
}

impl PublishTarget {
    /// Location an artifact file is (or would be) published to.
    ///
    /// Deploy uses this too, so both sides agree on the key.
    pub fn location_for(&self, artifact: &Path) -> ShipitResult<StorageLocation> {
        let key = StorageKey::for_artifact(&self.stack, &self.region, artifact)?;
        Ok(StorageLocation::new(self.bucket.clone(), key))
    }
}

pub struct PublishArtifactUseCase<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> PublishArtifactUseCase<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Upload `artifact`; fails before any network call unless it is a regular file.
    pub fn execute(&self, artifact: &Path, target: &PublishTarget) -> ShipitResult<StorageLocation> {
        if !artifact.is_file() {
            return Err(ShipitError::FileNotFound {
                path: artifact.to_path_buf(),
            });
        }

        let location = target.location_for(artifact)?;
        self.storage.upload(artifact, &location)?;
        Ok(location)
    }
}
