//! Folder create, rename, and delete against the remote authority.
//!
//! Each operation makes at most one remote call and, only once that call has
//! succeeded, applies the matching pure edit to produce a new tree. A failed
//! call returns the error and leaves the caller's tree exactly as it was.

use std::sync::Arc;

use tracing::{info, warn};

use folio_core::error::AppError;
use folio_core::traits::Confirmation;
use folio_core::types::FolderId;
use folio_entity::folder::{CreateFolder, FolderTree};
use folio_remote::FolderRepository;

/// Result of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// The tree with the new folder appended.
    pub tree: FolderTree,
    /// Id assigned by the authority.
    pub folder_id: FolderId,
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The person declined; nothing was sent.
    Declined,
    /// The authority removed the branch.
    Deleted {
        /// The tree without the removed branch.
        tree: FolderTree,
        /// New selection when the previous one was inside the removed
        /// branch: the deleted folder's parent, or the root alias.
        reselect: Option<FolderId>,
    },
}

/// Sequences folder edits with the remote authority.
#[derive(Debug, Clone)]
pub struct FolderOperations {
    /// Folder authority.
    repo: Arc<dyn FolderRepository>,
    /// Approves deletes.
    confirmation: Arc<dyn Confirmation>,
}

impl FolderOperations {
    /// Creates a new orchestrator.
    pub fn new(repo: Arc<dyn FolderRepository>, confirmation: Arc<dyn Confirmation>) -> Self {
        Self { repo, confirmation }
    }

    /// Fetches the flat folder list and builds a tree from it.
    pub async fn load(&self) -> Result<FolderTree, AppError> {
        let records = self.repo.list_folders().await.inspect_err(|e| {
            warn!(error = %e, "Failed to list folders");
        })?;
        Ok(FolderTree::from_records(&records))
    }

    /// Creates a folder named `name` under `parent` (root when `None` or the
    /// root alias).
    pub async fn create(
        &self,
        tree: &FolderTree,
        parent: Option<&FolderId>,
        name: &str,
    ) -> Result<CreateOutcome, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        let parent = parent.filter(|p| !p.is_root_alias());

        let record = self
            .repo
            .create_folder(&CreateFolder {
                name: name.to_string(),
                parent_id: parent.cloned(),
            })
            .await
            .inspect_err(|e| warn!(name = %name, error = %e, "Folder create rejected"))?;

        info!(folder_id = %record.id, name = %record.name, "Folder created");

        Ok(CreateOutcome {
            tree: tree.add(parent, record.to_node()),
            folder_id: record.id,
        })
    }

    /// Renames folder `id` from `old_name` to `new_name`.
    ///
    /// A name that trims to `old_name` returns the tree unchanged without
    /// contacting the authority.
    pub async fn rename(
        &self,
        tree: &FolderTree,
        id: &FolderId,
        new_name: &str,
        old_name: &str,
    ) -> Result<FolderTree, AppError> {
        if id.is_root_alias() {
            return Err(AppError::validation("The root folder cannot be renamed"));
        }
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        if new_name == old_name {
            return Ok(tree.clone());
        }

        let record = self
            .repo
            .rename_folder(id, new_name)
            .await
            .inspect_err(|e| warn!(folder_id = %id, error = %e, "Folder rename rejected"))?;

        info!(folder_id = %id, old_name = %old_name, new_name = %record.name, "Folder renamed");
        Ok(tree.rename(id, &record.name))
    }

    /// Deletes folder `id` and its whole branch after asking for
    /// confirmation.
    ///
    /// `selected` is the view's current selection; when it lies inside the
    /// removed branch the outcome names the folder to select instead.
    pub async fn delete(
        &self,
        tree: &FolderTree,
        id: &FolderId,
        name: &str,
        selected: Option<&FolderId>,
    ) -> Result<DeleteOutcome, AppError> {
        if id.is_root_alias() {
            return Err(AppError::validation("The root folder cannot be deleted"));
        }
        if !self.confirmation.confirm_delete(name).await {
            info!(folder_id = %id, "Folder delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.repo
            .delete_folder(id)
            .await
            .inspect_err(|e| warn!(folder_id = %id, error = %e, "Folder delete rejected"))?;

        let removed = tree.descendant_closure(id);
        let reselect = selected
            .filter(|current| removed.contains(*current))
            .map(|_| tree.parent_id(id).unwrap_or_else(FolderId::root_alias));

        info!(folder_id = %id, removed = removed.len(), "Folder deleted");
        Ok(DeleteOutcome::Deleted {
            tree: tree.remove(id),
            reselect,
        })
    }
}
