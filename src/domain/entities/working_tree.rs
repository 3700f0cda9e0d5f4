//! Working tree entity - snapshot of a git checkout taken at build time.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ArtifactName, ExclusionRules};
use crate::error::ShipitResult;

/// A version-controlled working tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingTree {
    root: PathBuf,
    branch: String,
    tracked_files: Vec<PathBuf>,
}

impl WorkingTree {
    pub fn new(root: PathBuf, branch: impl Into<String>, tracked_files: Vec<PathBuf>) -> Self {
        Self {
            root,
            branch: branch.into(),
            tracked_files,
        }
    }

    /// Top-level directory of the tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Repository name (basename of the top-level directory)
    pub fn repo_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Tracked files, relative to [`root`](Self::root), in index order
    pub fn tracked_files(&self) -> &[PathBuf] {
        &self.tracked_files
    }

    pub fn artifact_name(&self, template: &str) -> ShipitResult<ArtifactName> {
        ArtifactName::render(template, &self.repo_name(), &self.branch)
    }

    pub fn exclusions(&self) -> ExclusionRules {
        ExclusionRules::for_tree(&self.root)
    }
}
