//! S3 implementation of the StorageProvider port using `object_store`.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;

use crate::domain::ports::StorageProvider;
use crate::domain::value_objects::StorageLocation;
use crate::error::{ShipitError, ShipitResult};

/// Uploads artifacts to S3.
///
/// Credentials and, unless overridden, the bucket's region come from the
/// standard `AWS_*` environment variables. The store is async, so uploads
/// run on a private current-thread runtime.
pub struct S3Storage {
    bucket_region: Option<String>,
    store: Option<Arc<dyn ObjectStore>>,
}

impl S3Storage {
    /// Storage configured from the environment; `bucket_region` overrides
    /// `AWS_REGION` / `AWS_DEFAULT_REGION`.
    pub fn from_env(bucket_region: Option<String>) -> Self {
        Self {
            bucket_region,
            store: None,
        }
    }

    /// Use a pre-configured object store regardless of bucket
    pub fn with_store(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            bucket_region: None,
            store: Some(store),
        }
    }

    pub(crate) fn builder_for(&self, bucket: &str) -> AmazonS3Builder {
        let builder = AmazonS3Builder::from_env().with_bucket_name(bucket);
        match &self.bucket_region {
            Some(region) => builder.with_region(region),
            None => builder,
        }
    }

    fn store_for(&self, bucket: &str) -> ShipitResult<Arc<dyn ObjectStore>> {
        if let Some(store) = &self.store {
            return Ok(Arc::clone(store));
        }
        let s3 = self
            .builder_for(bucket)
            .build()
            .map_err(|e| ShipitError::Storage(format!("failed to create S3 client: {e}")))?;
        Ok(Arc::new(s3))
    }
}

impl StorageProvider for S3Storage {
    fn upload(&self, local: &Path, location: &StorageLocation) -> ShipitResult<()> {
        let data = std::fs::read(local)?;
        let store = self.store_for(&location.bucket)?;
        let object_path = ObjectPath::from(location.key.as_str());
        let size = data.len();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        tracing::debug!(location = %location, size, "uploading artifact");
        runtime
            .block_on(store.put(&object_path, Bytes::from(data).into()))
            .map_err(|e| ShipitError::Storage(format!("failed to upload {location}: {e}")))?;

        tracing::info!(location = %location, size, "artifact uploaded");
        Ok(())
    }
}
