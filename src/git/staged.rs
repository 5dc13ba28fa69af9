use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::{CognitiveGuardError, Result};

/// Returns the files staged for the next commit.
pub trait StagedFiles {
    /// Staged paths relative to the repository work tree, sorted.
    ///
    /// # Errors
    /// Returns an error if the index or HEAD cannot be read.
    fn staged_files(&self) -> Result<Vec<PathBuf>>;
}

/// Staged-file lookup using gix.
pub struct GitStaged {
    repo_path: PathBuf,
    workdir: PathBuf,
}

impl GitStaged {
    /// Open the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found or it is bare.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|e| {
            CognitiveGuardError::Git(format!("Failed to discover git repository: {e}"))
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| CognitiveGuardError::Git("Repository has no working directory".into()))?
            .to_path_buf();
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            workdir,
        })
    }

    /// Get the working directory of the repository.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| CognitiveGuardError::Git(format!("Failed to open git repository: {e}")))
    }

    fn collect_tree_blobs(
        tree: &gix::Tree<'_>,
        prefix: &Path,
        blobs: &mut HashMap<PathBuf, gix::ObjectId>,
    ) -> Result<()> {
        for entry in tree.iter() {
            let entry = entry.map_err(|e| {
                CognitiveGuardError::Git(format!("Failed to read tree entry: {e}"))
            })?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| CognitiveGuardError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = prefix.join(name);

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    blobs.insert(path, entry.oid().into());
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry
                        .object()
                        .map_err(|e| {
                            CognitiveGuardError::Git(format!("Failed to get subtree object: {e}"))
                        })?
                        .into_tree();
                    Self::collect_tree_blobs(&subtree, &path, blobs)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Blob ids in the HEAD tree; empty when the repository has no commits.
    fn head_blobs(repo: &gix::Repository) -> Result<HashMap<PathBuf, gix::ObjectId>> {
        let mut blobs = HashMap::new();
        let Ok(commit) = repo.head_commit() else {
            tracing::debug!("Repository has no HEAD commit, treating every index entry as staged");
            return Ok(blobs);
        };
        let tree = commit
            .tree()
            .map_err(|e| CognitiveGuardError::Git(format!("Failed to get HEAD tree: {e}")))?;
        Self::collect_tree_blobs(&tree, Path::new(""), &mut blobs)?;
        Ok(blobs)
    }
}

impl StagedFiles for GitStaged {
    fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;
        let index = repo
            .open_index()
            .map_err(|e| CognitiveGuardError::Git(format!("Failed to open git index: {e}")))?;
        let head = Self::head_blobs(&repo)?;

        let mut staged: Vec<PathBuf> = index
            .entries()
            .iter()
            .filter_map(|entry| {
                let path = PathBuf::from(String::from_utf8_lossy(entry.path(&index)).as_ref());
                let changed = head.get(&path).is_none_or(|head_id| *head_id != entry.id);
                changed.then_some(path)
            })
            .collect();
        staged.sort();
        staged.dedup();
        Ok(staged)
    }
}
