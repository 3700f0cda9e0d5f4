//! Artifact name value object.
//!
//! Turns a repository name and branch into the file name of the tarball,
//! guaranteeing the result is one plain path component.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{ShipitError, ShipitResult};

/// Default file name template for artifacts
pub const DEFAULT_NAME_TEMPLATE: &str = "{repo}-{branch}.tgz";

/// File name of a build artifact, e.g. `acme-feature-x.tgz`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// Render `template` with `{repo}` and `{branch}` substituted.
    ///
    /// Every `/` in the rendered name becomes `-` so branches such as
    /// `feature/x` never create nested paths.
    pub fn render(template: &str, repo: &str, branch: &str) -> ShipitResult<Self> {
        let rendered = template
            .replace("{repo}", repo)
            .replace("{branch}", branch)
            .replace('/', "-");
        Self::parse(rendered)
    }

    /// Validate an already-rendered name.
    pub fn parse(name: impl Into<String>) -> ShipitResult<Self> {
        let name = name.into();
        if is_plain_file_name(&name) {
            Ok(Self(name))
        } else {
            Err(ShipitError::InvalidArtifactName { name })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Location of this artifact inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    if name.is_empty() || name.contains('\0') {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
