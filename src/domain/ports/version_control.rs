//! Version control port
//!
//! Reads the facts the artifact builder needs from a working tree.

use std::path::{Path, PathBuf};

use crate::error::ShipitResult;

/// Read-only access to a version-controlled working tree.
///
/// Any failure means the directory is not usable as a working tree and
/// must surface as `ShipitError::NotAGitRepository`.
pub trait VersionControl {
    /// Top-level directory of the tree containing `dir`
    fn toplevel(&self, dir: &Path) -> ShipitResult<PathBuf>;

    /// Name of the checked-out branch
    fn current_branch(&self, root: &Path) -> ShipitResult<String>;

    /// Tracked files relative to `root`
    fn tracked_files(&self, root: &Path) -> ShipitResult<Vec<PathBuf>>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn toplevel(&self, dir: &Path) -> ShipitResult<PathBuf> {
        (**self).toplevel(dir)
    }

    fn current_branch(&self, root: &Path) -> ShipitResult<String> {
        (**self).current_branch(root)
    }

    fn tracked_files(&self, root: &Path) -> ShipitResult<Vec<PathBuf>> {
        (**self).tracked_files(root)
    }
}
