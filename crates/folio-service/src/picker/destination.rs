//! Choosing the folder an item is filed into.

use tracing::debug;

use folio_core::config::browser::BrowserConfig;
use folio_core::types::FolderId;
use folio_entity::folder::FolderTree;

use crate::browse::{TreeEditor, TreeRow};

/// Pre-selects a folder from a suggested path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DestinationResolver;

impl DestinationResolver {
    /// First folder, in depth-first order, whose name equals the last path
    /// segment ignoring case. The root alias never matches.
    pub fn resolve<S: AsRef<str>>(tree: &FolderTree, suggested: &[S]) -> Option<FolderId> {
        let wanted = suggested.last()?.as_ref().trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        tree.folders()
            .filter(|folder| !folder.id.is_root_alias())
            .find(|folder| folder.name.trim().to_lowercase() == wanted)
            .map(|folder| folder.id.clone())
    }
}

/// Folder picker used when integrating an item into the repository.
#[derive(Debug, Clone)]
pub struct DestinationPicker {
    tree: FolderTree,
    editor: TreeEditor,
}

impl DestinationPicker {
    /// Open a picker over `tree`, pre-selecting the folder matching
    /// `suggested` when there is one and expanding its ancestors.
    pub fn new<S: AsRef<str>>(tree: FolderTree, config: BrowserConfig, suggested: &[S]) -> Self {
        let mut editor = TreeEditor::new(config, false);
        if let Some(id) = DestinationResolver::resolve(&tree, suggested) {
            debug!(folder_id = %id, "Suggested destination preselected");
            editor.reveal(&tree, &id);
            editor.set_selected(Some(id));
        }
        Self { tree, editor }
    }

    /// The folder tree shown.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// The current choice.
    pub fn selected(&self) -> Option<&FolderId> {
        self.editor.selected()
    }

    /// Choose `id`. Ids not in the tree are ignored.
    pub fn select(&mut self, id: &FolderId) -> bool {
        if !self.tree.contains(id) {
            return false;
        }
        self.editor.select(&self.tree, id);
        true
    }

    /// Flip the expansion of `id`.
    pub fn toggle_expand(&mut self, id: &FolderId) -> bool {
        self.editor.toggle_expand(&self.tree, id)
    }

    /// Visible rows of the picker.
    pub fn rows(&self) -> Vec<TreeRow> {
        self.editor.rows(&self.tree)
    }

    /// The chosen folder and its path from the root; `None` until a
    /// folder is chosen.
    pub fn confirm(&self) -> Option<(FolderId, Vec<String>)> {
        let id = self.editor.selected()?;
        let path = self.tree.path_to(id)?;
        Some((id.clone(), path))
    }
}
