//! Archive exclusion rules
//!
//! Patterns handed to the archiver so VCS internals and gitignored paths
//! never end up in an artifact.

use std::path::{Path, PathBuf};

/// Patterns that always match version-control internals.
pub const VCS_EXCLUDES: &[&str] = &["*/.git*", ".git*"];

/// Exclusion rules for one archive build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    patterns: Vec<String>,
    exclude_from: Option<PathBuf>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            patterns: VCS_EXCLUDES.iter().map(|p| p.to_string()).collect(),
            exclude_from: None,
        }
    }
}

impl ExclusionRules {
    /// Rules for a working tree rooted at `root`.
    ///
    /// Adds the root `.gitignore` as an exclude-from file when it exists.
    pub fn for_tree(root: &Path) -> Self {
        let gitignore = root.join(".gitignore");
        let mut rules = Self::default();
        if gitignore.is_file() {
            rules.exclude_from = Some(gitignore);
        }
        rules
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn exclude_from(&self) -> Option<&Path> {
        self.exclude_from.as_deref()
    }
}
