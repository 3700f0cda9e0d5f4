//! Archiver port - produces a compressed tarball from a file list.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExclusionRules;
use crate::error::ShipitResult;

/// Everything an archiver needs to build one artifact.
#[derive(Debug, Clone)]
pub struct ArchiveRequest<'a> {
    /// Directory the file list is relative to
    pub root: &'a Path,
    /// Output path of the gzip tarball
    pub output: &'a Path,
    /// Files to include
    pub files: &'a [PathBuf],
    pub exclusions: &'a ExclusionRules,
    /// Directory for the scoped file-list temp file
    pub scratch_dir: &'a Path,
}

pub trait Archiver {
    /// Write a gzip-compressed tar of `request.files` to `request.output`.
    fn create(&self, request: &ArchiveRequest<'_>) -> ShipitResult<()>;
}

impl<T: Archiver + ?Sized> Archiver for &T {
    fn create(&self, request: &ArchiveRequest<'_>) -> ShipitResult<()> {
        (**self).create(request)
    }
}
