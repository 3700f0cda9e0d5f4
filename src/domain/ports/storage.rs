//! Storage port - single-shot upload of a local file to object storage.

use std::path::Path;

use crate::domain::value_objects::StorageLocation;
use crate::error::ShipitResult;

pub trait StorageProvider {
    /// Upload the bytes of `local` to `location`, overwriting any object
    /// already stored there.
    fn upload(&self, local: &Path, location: &StorageLocation) -> ShipitResult<()>;
}

impl<T: StorageProvider + ?Sized> StorageProvider for &T {
    fn upload(&self, local: &Path, location: &StorageLocation) -> ShipitResult<()> {
        (**self).upload(local, location)
    }
}
