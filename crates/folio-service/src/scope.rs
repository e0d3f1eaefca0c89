//! Item scoping by folder branch.

use std::collections::HashSet;

use folio_core::types::FolderId;
use folio_entity::folder::FolderTree;
use folio_entity::leaf::LeafItem;

/// Which folders an item listing is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderScope {
    /// No folder filter (the root alias or nothing is selected).
    All,
    /// The selected folder and everything below it.
    Folders(HashSet<FolderId>),
}

impl FolderScope {
    /// Scope implied by a selection.
    ///
    /// An id missing from the tree yields an empty branch, not an error.
    pub fn for_selection(tree: &FolderTree, selected: Option<&FolderId>) -> Self {
        match selected {
            None => Self::All,
            Some(id) if id.is_root_alias() => Self::All,
            Some(id) => Self::Folders(descendant_scope(tree, id)),
        }
    }

    /// Whether items filed under `folder_id` are in scope.
    pub fn contains(&self, folder_id: &FolderId) -> bool {
        match self {
            Self::All => true,
            Self::Folders(ids) => ids.contains(folder_id),
        }
    }

    /// The folder ids of a restricted scope; `None` when unrestricted.
    pub fn folder_ids(&self) -> Option<&HashSet<FolderId>> {
        match self {
            Self::All => None,
            Self::Folders(ids) => Some(ids),
        }
    }

    /// Items in scope, in input order.
    pub fn filter<'a>(&'a self, items: &'a [LeafItem]) -> impl Iterator<Item = &'a LeafItem> + 'a {
        items.iter().filter(move |item| self.contains(&item.folder_id))
    }
}

/// `id` plus every folder below it; empty when `id` is not in the tree.
pub fn descendant_scope(tree: &FolderTree, id: &FolderId) -> HashSet<FolderId> {
    tree.descendant_closure(id)
}
