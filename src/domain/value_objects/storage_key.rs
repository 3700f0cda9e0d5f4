//! Object storage key and location value objects.
//!
//! Publish and deploy both derive keys through [`StorageKey::for_artifact`],
//! so a deploy always points at the object a prior upload wrote.

use std::fmt;
use std::path::Path;

use crate::error::{ShipitError, ShipitResult};

/// Object key of the form `{stack}-{region}/{artifact basename}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Derive the key for a local artifact path.
    pub fn for_artifact(stack: &str, region: &str, artifact: &Path) -> ShipitResult<Self> {
        let basename = artifact
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ShipitError::InvalidArtifactName {
                name: artifact.display().to_string(),
            })?;
        Ok(Self::new(stack, region, basename))
    }

    pub fn new(stack: &str, region: &str, basename: &str) -> Self {
        Self(format!("{}-{}/{}", stack, region, basename))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully-qualified object location (bucket + key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    pub bucket: String,
    pub key: StorageKey,
}

impl StorageLocation {
    pub fn new(bucket: impl Into<String>, key: StorageKey) -> Self {
        Self {
            bucket: bucket.into(),
            key,
        }
    }

    /// `s3://bucket/key`, the form handed to the remote deploy script.
    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri())
    }
}
