//! A folder view: one tree snapshot plus its editor.
//!
//! Each browser owns its own snapshot. Edits made through another browser
//! are only seen after [`FolderBrowser::refresh`].

use std::borrow::Cow;

use tracing::{debug, info};

use folio_core::config::browser::BrowserConfig;
use folio_core::error::AppError;
use folio_core::types::FolderId;
use folio_entity::folder::FolderTree;
use folio_entity::leaf::LeafItem;

use super::editor::{CommitTrigger, EditorEvent, TreeEditor, TreeRow};
use crate::folder::{DeleteOutcome, FolderOperations};
use crate::scope::FolderScope;

/// Folder tree view bound to the remote authority.
#[derive(Debug, Clone)]
pub struct FolderBrowser {
    ops: FolderOperations,
    editor: TreeEditor,
    tree: FolderTree,
    items: Vec<LeafItem>,
    notice: Option<String>,
}

impl FolderBrowser {
    /// Create an unmounted browser with an empty snapshot.
    pub fn new(ops: FolderOperations, config: BrowserConfig, with_root_alias: bool) -> Self {
        Self {
            ops,
            editor: TreeEditor::new(config, with_root_alias),
            tree: FolderTree::empty(),
            items: Vec::new(),
            notice: None,
        }
    }

    /// Fetch the initial snapshot. The root alias starts selected in views
    /// that have one.
    pub async fn mount(&mut self) -> Result<(), AppError> {
        self.refresh().await?;
        if self.editor.has_root_alias() && self.editor.selected().is_none() {
            self.editor.set_selected(Some(FolderId::root_alias()));
        }
        info!(folders = self.tree.folder_count(), "Folder browser mounted");
        Ok(())
    }

    /// Replace the snapshot with a fresh listing.
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        let loaded = self.ops.load().await;
        let tree = loaded.inspect_err(|e| self.surface(e))?;
        self.editor.on_tree_refreshed(&tree);
        self.tree = tree;
        Ok(())
    }

    /// The current snapshot.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// The editor state.
    pub fn editor(&self) -> &TreeEditor {
        &self.editor
    }

    /// Mutable editor state for expansion and inline input handling.
    pub fn editor_mut(&mut self) -> &mut TreeEditor {
        &mut self.editor
    }

    /// Leaf items rendered under their folders when files are shown.
    pub fn set_items(&mut self, items: Vec<LeafItem>) {
        self.items = items;
    }

    /// The last user-visible failure message.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Take and clear the user-visible failure message.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Visible rows of the view.
    pub fn rows(&self) -> Vec<TreeRow> {
        self.editor.rows(&self.rendered())
    }

    /// Flip the expansion of `id` as rendered, leaf items included.
    pub fn toggle_expand(&mut self, id: &FolderId) -> bool {
        let tree = self.rendered().into_owned();
        self.editor.toggle_expand(&tree, id)
    }

    fn rendered(&self) -> Cow<'_, FolderTree> {
        if self.editor.config().show_files && !self.items.is_empty() {
            Cow::Owned(self.tree.with_leaves(&self.items))
        } else {
            Cow::Borrowed(&self.tree)
        }
    }

    /// Select `id` and return the item scope it implies.
    pub fn select(&mut self, id: &FolderId) -> FolderScope {
        let EditorEvent::Selected(selected) = self.editor.select(&self.tree, id) else {
            return FolderScope::All;
        };
        FolderScope::for_selection(&self.tree, Some(&selected))
    }

    /// Open an inline "new folder" input under `parent`. Returns the new
    /// item scope when the parent became the selection.
    pub fn start_add_child(
        &mut self,
        parent: Option<&FolderId>,
    ) -> Result<Option<FolderScope>, AppError> {
        let event = self.editor.start_add_child(&self.tree, parent)?;
        Ok(event.map(|_| self.scope()))
    }

    /// Item scope of the current selection.
    pub fn scope(&self) -> FolderScope {
        FolderScope::for_selection(&self.tree, self.editor.selected())
    }

    /// Close the open inline edit and send it to the authority.
    ///
    /// On failure the snapshot is untouched and the message is kept as the
    /// notice.
    pub async fn commit(&mut self, trigger: CommitTrigger) -> Result<(), AppError> {
        let Some(event) = self.editor.commit(trigger) else {
            return Ok(());
        };

        match event {
            EditorEvent::CommitRename {
                id,
                new_name,
                old_name,
            } => {
                self.editor.mark_pending(&id);
                let result = self.ops.rename(&self.tree, &id, &new_name, &old_name).await;
                self.editor.clear_pending(&id);
                let tree = result.inspect_err(|e| self.surface(e))?;
                self.apply(tree).await
            }
            EditorEvent::CommitCreate { parent_id, name } => {
                let result = self.ops.create(&self.tree, parent_id.as_ref(), &name).await;
                let outcome = result.inspect_err(|e| self.surface(e))?;
                self.apply(outcome.tree).await
            }
            EditorEvent::Selected(_) | EditorEvent::Deselected => Ok(()),
        }
    }

    /// Delete `id` after confirmation.
    ///
    /// Returns `None` when declined, otherwise the item scope of the
    /// selection after the delete. When the selection was inside the removed
    /// branch it moves to the deleted folder's parent, or to the fallback
    /// selection for root-level folders.
    pub async fn delete(&mut self, id: &FolderId) -> Result<Option<FolderScope>, AppError> {
        if self.editor.is_pending(id) {
            return Err(AppError::validation("An edit of this folder is in progress"));
        }
        let name = self
            .tree
            .find_by_id(id)
            .map(|folder| folder.name.clone())
            .ok_or_else(|| AppError::not_found(format!("Folder '{id}' not found")))?;

        self.editor.mark_pending(id);
        let result = self
            .ops
            .delete(&self.tree, id, &name, self.editor.selected())
            .await;
        self.editor.clear_pending(id);

        match result.inspect_err(|e| self.surface(e))? {
            DeleteOutcome::Declined => Ok(None),
            DeleteOutcome::Deleted { tree, reselect } => {
                self.editor.on_removed(&self.tree.descendant_closure(id));
                if let Some(next) = reselect {
                    let next = if next.is_root_alias() {
                        self.editor.fallback_selection()
                    } else {
                        Some(next)
                    };
                    debug!(selected = ?next, "Selection moved after delete");
                    self.editor.set_selected(next);
                }
                self.apply(tree).await?;
                Ok(Some(self.scope()))
            }
        }
    }

    async fn apply(&mut self, tree: FolderTree) -> Result<(), AppError> {
        self.notice = None;
        if self.editor.config().refetch_after_edit {
            return self.refresh().await;
        }
        self.tree = tree;
        Ok(())
    }

    fn surface(&mut self, err: &AppError) {
        if err.is_local() {
            debug!(error = %err, "Local edit rejected");
            return;
        }
        self.notice = Some(err.message.clone());
    }
}
