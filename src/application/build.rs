//! Build Artifact Use Case
//!
//! Orchestrates the artifact build:
//! 1. Validate the input directory
//! 2. Snapshot the working tree (top-level, branch, tracked files)
//! 3. Derive the artifact name and exclusion rules
//! 4. Hand the file list to the archiver

use std::path::{Path, PathBuf};

use crate::domain::entities::WorkingTree;
use crate::domain::ports::{ArchiveRequest, Archiver, VersionControl};
use crate::domain::value_objects::ArtifactName;
use crate::error::{ShipitError, ShipitResult};

/// Options for one build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Any directory inside the working tree
    pub path: PathBuf,
    /// Directory the artifact is written to
    pub temp_dir: PathBuf,
    pub name_template: String,
}

/// Outcome of a successful build
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub artifact: PathBuf,
    pub tree: WorkingTree,
}

impl BuildResult {
    pub fn file_count(&self) -> usize {
        self.tree.tracked_files().len()
    }
}

/// Build use case, parameterized by its ports.
pub struct BuildArtifactUseCase<V, A>
where
    V: VersionControl,
    A: Archiver,
{
    vcs: V,
    archiver: A,
}

impl<V, A> BuildArtifactUseCase<V, A>
where
    V: VersionControl,
    A: Archiver,
{
    pub fn new(vcs: V, archiver: A) -> Self {
        Self { vcs, archiver }
    }

    /// Snapshot the working tree containing `path`.
    pub fn resolve_tree(&self, path: &Path) -> ShipitResult<WorkingTree> {
        if !path.is_dir() {
            return Err(ShipitError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        let root = self.vcs.toplevel(path).map_err(|e| relabel(e, path))?;
        let branch = self.vcs.current_branch(&root).map_err(|e| relabel(e, path))?;
        let files = self.vcs.tracked_files(&root).map_err(|e| relabel(e, path))?;

        Ok(WorkingTree::new(root, branch, files))
    }

    /// Artifact path a build of `path` would produce, without building it.
    pub fn planned_artifact(&self, options: &BuildOptions) -> ShipitResult<PathBuf> {
        let tree = self.resolve_tree(&options.path)?;
        let name = tree.artifact_name(&options.name_template)?;
        Ok(name.path_in(&options.temp_dir))
    }

    pub fn execute(&self, options: &BuildOptions) -> ShipitResult<BuildResult> {
        let tree = self.resolve_tree(&options.path)?;
        let name: ArtifactName = tree.artifact_name(&options.name_template)?;

        std::fs::create_dir_all(&options.temp_dir)?;
        let artifact = name.path_in(&options.temp_dir);
        let exclusions = tree.exclusions();

        tracing::info!(
            repo = %tree.repo_name(),
            branch = %tree.branch(),
            files = tree.tracked_files().len(),
            artifact = %artifact.display(),
            "building artifact"
        );

        self.archiver.create(&ArchiveRequest {
            root: tree.root(),
            output: &artifact,
            files: tree.tracked_files(),
            exclusions: &exclusions,
            scratch_dir: &options.temp_dir,
        })?;

        Ok(BuildResult { artifact, tree })
    }
}

/// Report VCS failures against the directory the user asked for.
fn relabel(err: ShipitError, path: &Path) -> ShipitError {
    match err {
        ShipitError::NotAGitRepository { message, .. } => ShipitError::NotAGitRepository {
            path: path.to_path_buf(),
            message,
        },
        other => ShipitError::NotAGitRepository {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::DEFAULT_NAME_TEMPLATE;
    use std::cell::RefCell;
    use tempfile::tempdir;

    struct MockVcs {
        root: Option<PathBuf>,
        branch: &'static str,
        files: Vec<PathBuf>,
        fail_branch: bool,
    }

    impl MockVcs {
        fn repo(root: &Path, branch: &'static str, files: &[&str]) -> Self {
            Self {
                root: Some(root.to_path_buf()),
                branch,
                files: files.iter().map(PathBuf::from).collect(),
                fail_branch: false,
            }
        }

        fn not_a_repo() -> Self {
            Self {
                root: None,
                branch: "",
                files: vec![],
                fail_branch: false,
            }
        }
    }

    impl VersionControl for MockVcs {
        fn toplevel(&self, dir: &Path) -> ShipitResult<PathBuf> {
            self.root.clone().ok_or_else(|| ShipitError::NotAGitRepository {
                path: dir.to_path_buf(),
                message: "fatal: not a git repository".to_string(),
            })
        }

        fn current_branch(&self, _root: &Path) -> ShipitResult<String> {
            if self.fail_branch {
                return Err(ShipitError::Io(std::io::Error::other("git crashed")));
            }
            Ok(self.branch.to_string())
        }

        fn tracked_files(&self, _root: &Path) -> ShipitResult<Vec<PathBuf>> {
            Ok(self.files.clone())
        }
    }

    #[derive(Default)]
    struct MockArchiver {
        requests: RefCell<Vec<(PathBuf, PathBuf, Vec<PathBuf>, Option<PathBuf>)>>,
    }

    impl Archiver for MockArchiver {
        fn create(&self, request: &ArchiveRequest<'_>) -> ShipitResult<()> {
            self.requests.borrow_mut().push((
                request.root.to_path_buf(),
                request.output.to_path_buf(),
                request.files.to_vec(),
                request.exclusions.exclude_from().map(Path::to_path_buf),
            ));
            Ok(())
        }
    }

    fn options(path: &Path, temp_dir: &Path) -> BuildOptions {
        BuildOptions {
            path: path.to_path_buf(),
            temp_dir: temp_dir.to_path_buf(),
            name_template: DEFAULT_NAME_TEMPLATE.to_string(),
        }
    }

    #[test]
    fn builds_artifact_named_after_repo_and_branch() {
        let work = tempdir().unwrap();
        let root = work.path().join("acme");
        std::fs::create_dir(&root).unwrap();
        let out = tempdir().unwrap();

        let vcs = MockVcs::repo(&root, "main", &["a.txt", "b.txt"]);
        let archiver = MockArchiver::default();
        let use_case = BuildArtifactUseCase::new(vcs, &archiver);

        let result = use_case.execute(&options(&root, out.path())).unwrap();

        assert_eq!(result.artifact, out.path().join("acme-main.tgz"));
        assert_eq!(result.file_count(), 2);
        let requests = archiver.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, root);
        assert_eq!(
            requests[0].2,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
        assert_eq!(requests[0].3, None);
    }

    #[test]
    fn slash_branch_stays_inside_temp_dir() {
        let work = tempdir().unwrap();
        let root = work.path().join("acme");
        std::fs::create_dir(&root).unwrap();
        let out = tempdir().unwrap();

        let use_case = BuildArtifactUseCase::new(
            MockVcs::repo(&root, "feature/x", &["a.txt"]),
            MockArchiver::default(),
        );
        let result = use_case.execute(&options(&root, out.path())).unwrap();

        assert_eq!(result.artifact, out.path().join("acme-feature-x.tgz"));
        assert_eq!(result.artifact.parent(), Some(out.path()));
    }

    #[test]
    fn passes_gitignore_to_archiver() {
        let work = tempdir().unwrap();
        let root = work.path().join("acme");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join(".gitignore"), "*.log\n").unwrap();

        let archiver = MockArchiver::default();
        let use_case =
            BuildArtifactUseCase::new(MockVcs::repo(&root, "main", &["a.txt"]), &archiver);
        use_case.execute(&options(&root, work.path())).unwrap();

        assert_eq!(
            archiver.requests.borrow()[0].3,
            Some(root.join(".gitignore"))
        );
    }

    #[test]
    fn missing_directory_is_not_a_directory() {
        let archiver = MockArchiver::default();
        let use_case = BuildArtifactUseCase::new(MockVcs::not_a_repo(), &archiver);

        let err = use_case
            .execute(&options(Path::new("/definitely/missing"), Path::new("/tmp")))
            .unwrap_err();

        assert!(matches!(err, ShipitError::NotADirectory { .. }));
        assert!(archiver.requests.borrow().is_empty());
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let work = tempdir().unwrap();
        let file = work.path().join("README");
        std::fs::write(&file, "hi").unwrap();

        let use_case = BuildArtifactUseCase::new(MockVcs::not_a_repo(), MockArchiver::default());
        let err = use_case.execute(&options(&file, work.path())).unwrap_err();
        assert!(matches!(err, ShipitError::NotADirectory { .. }));
    }

    #[test]
    fn outside_git_is_not_a_repository_and_builds_nothing() {
        let work = tempdir().unwrap();
        let archiver = MockArchiver::default();
        let use_case = BuildArtifactUseCase::new(MockVcs::not_a_repo(), &archiver);

        let err = use_case
            .execute(&options(work.path(), work.path()))
            .unwrap_err();

        match err {
            ShipitError::NotAGitRepository { path, .. } => assert_eq!(path, work.path()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(archiver.requests.borrow().is_empty());
    }

    #[test]
    fn branch_lookup_failure_is_not_a_repository() {
        let work = tempdir().unwrap();
        let mut vcs = MockVcs::repo(work.path(), "main", &[]);
        vcs.fail_branch = true;

        let use_case = BuildArtifactUseCase::new(vcs, MockArchiver::default());
        let err = use_case
            .execute(&options(work.path(), work.path()))
            .unwrap_err();
        assert!(matches!(err, ShipitError::NotAGitRepository { .. }));
    }

    #[test]
    fn planned_artifact_does_not_archive() {
        let work = tempdir().unwrap();
        let root = work.path().join("acme");
        std::fs::create_dir(&root).unwrap();
        let archiver = MockArchiver::default();
        let use_case = BuildArtifactUseCase::new(MockVcs::repo(&root, "main", &[]), &archiver);

        let planned = use_case
            .planned_artifact(&options(&root, Path::new("/tmp")))
            .unwrap();

        assert_eq!(planned, PathBuf::from("/tmp/acme-main.tgz"));
        assert!(archiver.requests.borrow().is_empty());
    }
}
