//! Leaf item model.

use serde::{Deserialize, Serialize};

use folio_core::types::{FolderId, LeafId};

/// A document filed under exactly one folder.
///
/// Leaves are not part of the folder structure; they are attached to a
/// tree only when a view asks to show files. Moving a leaf changes
/// `folder_id` through the item subsystem and never reshapes the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafItem {
    /// Item identifier.
    pub id: LeafId,
    /// Display name.
    pub name: String,
    /// The folder this item is filed under.
    pub folder_id: FolderId,
}

impl LeafItem {
    /// Create a leaf item reference.
    pub fn new(
        id: impl Into<LeafId>,
        name: impl Into<String>,
        folder_id: impl Into<FolderId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            folder_id: folder_id.into(),
        }
    }
}
