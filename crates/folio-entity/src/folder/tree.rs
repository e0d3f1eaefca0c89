//! The nested folder tree and the pure algorithms over it.
//!
//! Every edit borrows the tree immutably and returns a new value, so a
//! snapshot held elsewhere never observes a partial edit.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use folio_core::types::FolderId;

use super::node::{FolderNode, TreeNode};
use crate::leaf::LeafItem;

/// An ordered sequence of root-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderTree {
    roots: Vec<TreeNode>,
}

impl FolderTree {
    /// Create a tree from its root nodes.
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self { roots }
    }

    /// Create an empty tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Root-level nodes in order.
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first pre-order walk over every folder.
    pub fn folders(&self) -> Folders<'_> {
        Folders {
            stack: vec![self.roots.iter()],
        }
    }

    /// Total number of folders in the tree.
    pub fn folder_count(&self) -> usize {
        self.folders().count()
    }

    /// Find a folder by id, parents before children, siblings in order.
    pub fn find_by_id(&self, id: &FolderId) -> Option<&FolderNode> {
        self.folders().find(|folder| folder.id == *id)
    }

    /// Whether a folder with this id exists.
    pub fn contains(&self, id: &FolderId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Names from a root folder down to `id`, inclusive.
    pub fn path_to(&self, id: &FolderId) -> Option<Vec<String>> {
        let mut path = Vec::new();
        path_in(&self.roots, id, &mut path).then_some(path)
    }

    /// The id of the folder directly containing `id`.
    ///
    /// Returns `None` both for root-level folders and for unknown ids.
    pub fn parent_id(&self, id: &FolderId) -> Option<FolderId> {
        self.folders()
            .find(|folder| folder.subfolders().any(|child| child.id == *id))
            .map(|folder| folder.id.clone())
    }

    /// `id` plus every folder id below it, collected breadth-first.
    ///
    /// Empty when `id` is not in the tree.
    pub fn descendant_closure(&self, id: &FolderId) -> HashSet<FolderId> {
        let mut closure = HashSet::new();
        let Some(start) = self.find_by_id(id) else {
            return closure;
        };

        let mut queue = VecDeque::from([start]);
        while let Some(folder) = queue.pop_front() {
            closure.insert(folder.id.clone());
            queue.extend(folder.subfolders());
        }
        closure
    }

    /// Append `node` at the root (`parent == None`) or as the last child of
    /// `parent`.
    ///
    /// An unresolvable parent leaves the tree unchanged.
    #[must_use = "tree edits return a new tree"]
    pub fn add(&self, parent: Option<&FolderId>, node: FolderNode) -> FolderTree {
        let mut next = self.clone();
        match parent {
            None => next.roots.push(TreeNode::Folder(node)),
            Some(parent_id) => match find_in_mut(&mut next.roots, parent_id) {
                Some(folder) => folder.children.push(TreeNode::Folder(node)),
                None => debug!(parent_id = %parent_id, "Add target not found, tree unchanged"),
            },
        }
        next
    }

    /// Replace the name of folder `id`; everything else is kept.
    #[must_use = "tree edits return a new tree"]
    pub fn rename(&self, id: &FolderId, new_name: &str) -> FolderTree {
        let mut next = self.clone();
        if let Some(folder) = find_in_mut(&mut next.roots, id) {
            folder.name = new_name.to_string();
        }
        next
    }

    /// Remove folder `id` together with its whole subtree.
    #[must_use = "tree edits return a new tree"]
    pub fn remove(&self, id: &FolderId) -> FolderTree {
        let mut next = self.clone();
        prune(&mut next.roots, id);
        next
    }

    /// Attach leaf items under the folders they reference.
    ///
    /// Items whose folder is not in the tree are skipped.
    #[must_use = "tree edits return a new tree"]
    pub fn with_leaves(&self, items: &[LeafItem]) -> FolderTree {
        let mut next = self.clone();
        for item in items {
            match find_in_mut(&mut next.roots, &item.folder_id) {
                Some(folder) => folder.children.push(TreeNode::Leaf(item.clone())),
                None => debug!(
                    leaf_id = %item.id,
                    folder_id = %item.folder_id,
                    "Leaf references unknown folder, skipped"
                ),
            }
        }
        next
    }
}

/// Depth-first pre-order iterator over the folders of a tree.
#[derive(Debug)]
pub struct Folders<'a> {
    stack: Vec<std::slice::Iter<'a, TreeNode>>,
}

impl<'a> Iterator for Folders<'a> {
    type Item = &'a FolderNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(level) = self.stack.last_mut() {
            match level.next() {
                Some(TreeNode::Folder(folder)) => {
                    self.stack.push(folder.children.iter());
                    return Some(folder);
                }
                Some(TreeNode::Leaf(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

fn path_in(nodes: &[TreeNode], id: &FolderId, path: &mut Vec<String>) -> bool {
    for folder in nodes.iter().filter_map(TreeNode::as_folder) {
        path.push(folder.name.clone());
        if folder.id == *id || path_in(&folder.children, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn find_in_mut<'a>(nodes: &'a mut [TreeNode], id: &FolderId) -> Option<&'a mut FolderNode> {
    for node in nodes.iter_mut() {
        let Some(folder) = node.as_folder_mut() else {
            continue;
        };
        if folder.id == *id {
            return Some(folder);
        }
        if let Some(found) = find_in_mut(&mut folder.children, id) {
            return Some(found);
        }
    }
    None
}

fn prune(nodes: &mut Vec<TreeNode>, id: &FolderId) -> bool {
    if let Some(pos) = nodes
        .iter()
        .position(|node| matches!(node, TreeNode::Folder(folder) if folder.id == *id))
    {
        nodes.remove(pos);
        return true;
    }
    nodes
        .iter_mut()
        .filter_map(TreeNode::as_folder_mut)
        .any(|folder| prune(&mut folder.children, id))
}
