//! Tree node shapes.
//!
//! A node is a folder when it carries a children sequence (even an empty
//! one) and a leaf otherwise. The serialized form keeps that rule: an
//! object with a `children` key decodes as a folder.

use serde::{Deserialize, Serialize};

use folio_core::types::FolderId;

use crate::leaf::LeafItem;

/// Classification of a tree node by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A container with a children sequence.
    Folder,
    /// A reference to a filed item.
    Leaf,
}

/// A folder in the nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Cached item count for this branch, as reported at fetch time.
    #[serde(default)]
    pub count: u64,
    /// Child nodes in authority order.
    pub children: Vec<TreeNode>,
}

impl FolderNode {
    /// Create a folder node with no children.
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>, count: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count,
            children: Vec::new(),
        }
    }

    /// Builder-style helper to attach children.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// True iff any child is itself a folder.
    pub fn has_subfolders(&self) -> bool {
        self.children.iter().any(TreeNode::is_folder)
    }

    /// Number of leaf items anywhere below this folder.
    ///
    /// This walks the attached leaves and ignores the cached `count`.
    pub fn count_leaves_recursive(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                TreeNode::Folder(folder) => folder.count_leaves_recursive(),
                TreeNode::Leaf(_) => 1,
            })
            .sum()
    }

    /// Child folders, skipping leaves.
    pub fn subfolders(&self) -> impl Iterator<Item = &FolderNode> {
        self.children.iter().filter_map(TreeNode::as_folder)
    }
}

/// Either a folder or a leaf reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// A folder node.
    Folder(FolderNode),
    /// A leaf item reference.
    Leaf(LeafItem),
}

impl TreeNode {
    /// Classify this node by its shape.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder(_) => NodeKind::Folder,
            Self::Leaf(_) => NodeKind::Leaf,
        }
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// The node's identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(folder) => folder.id.as_str(),
            Self::Leaf(leaf) => leaf.id.as_str(),
        }
    }

    /// The node's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::Leaf(leaf) => &leaf.name,
        }
    }

    /// Borrow the folder, if this node is one.
    pub fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::Leaf(_) => None,
        }
    }

    pub(crate) fn as_folder_mut(&mut self) -> Option<&mut FolderNode> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::Leaf(_) => None,
        }
    }
}

impl From<FolderNode> for TreeNode {
    fn from(folder: FolderNode) -> Self {
        Self::Folder(folder)
    }
}

impl From<LeafItem> for TreeNode {
    fn from(leaf: LeafItem) -> Self {
        Self::Leaf(leaf)
    }
}
