//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module is the **single doorway** to the repository: capturing the
//! staged diff and applying the generated commit. No other module should
//! import `git2` directly, which keeps error handling consistent and the
//! boundary strongly typed.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// The index holds nothing to describe or commit.
    #[error("no staged changes found")]
    NoStagedChanges,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// The Git interface.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("git_dir", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Check if the index holds staged changes.
    pub fn has_staged(&self) -> Result<bool, GitError> {
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(false).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut opts))?;
        let staged = statuses.iter().any(|entry| {
            let status = entry.status();
            status.is_index_new()
                || status.is_index_modified()
                || status.is_index_deleted()
                || status.is_index_renamed()
                || status.is_index_typechange()
        });
        Ok(staged)
    }

    /// Render the staged changes as a unified patch.
    ///
    /// Diffs the HEAD tree (or nothing, before the first commit) against
    /// the index, matching `git diff --staged`.
    ///
    /// # Errors
    ///
    /// - [`GitError::NoStagedChanges`] if the diff is empty
    pub fn staged_diff(&self) -> Result<String, GitError> {
        let head_tree = match self.repo.head() {
            Ok(head) => Some(head.peel_to_tree()?),
            // Unborn HEAD: everything staged is new.
            Err(err)
                if err.code() == git2::ErrorCode::UnbornBranch
                    || err.code() == git2::ErrorCode::NotFound =>
            {
                None
            }
            Err(err) => return Err(err.into()),
        };

        let index = self.repo.index()?;
        let diff =
            self.repo
                .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        let mut patch = String::new();
        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            match line.origin() {
                '+' | '-' | ' ' => patch.push(line.origin()),
                _ => {}
            }
            patch.push_str(std::str::from_utf8(line.content()).unwrap_or(""));
            true
        })?;

        if patch.is_empty() {
            return Err(GitError::NoStagedChanges);
        }
        Ok(patch)
    }

    /// Commit the staged index with the given message.
    ///
    /// Author and committer come from the repository signature (git
    /// config). Handles the unborn-HEAD case by creating a root commit.
    ///
    /// # Errors
    ///
    /// - [`GitError::NoStagedChanges`] if there is nothing staged
    pub fn commit_staged(&self, message: &str) -> Result<String, GitError> {
        if !self.has_staged()? {
            return Err(GitError::NoStagedChanges);
        }

        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;
        let signature = self.repo.signature()?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(err)
                if err.code() == git2::ErrorCode::UnbornBranch
                    || err.code() == git2::ErrorCode::NotFound =>
            {
                None
            }
            Err(err) => return Err(err.into()),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        Ok(oid.to_string())
    }
}
