//! Flat record list to nested tree conversion.
//!
//! Records are first loaded into an arena keyed by id with explicit parent
//! links. Linking never trusts `parent_id` blindly: a parent that is
//! unknown, the root alias, or would close a cycle makes the record a root.
//! The linked parents therefore always form a forest.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, warn};

use folio_core::types::FolderId;

use super::model::FolderRecord;
use super::node::{FolderNode, TreeNode};
use super::tree::FolderTree;

#[derive(Debug, Clone)]
struct ArenaEntry {
    record: FolderRecord,
    parent: Option<FolderId>,
    children: Vec<FolderId>,
}

/// Flat id → folder store with validated parent links.
#[derive(Debug, Clone, Default)]
pub struct FolderArena {
    entries: HashMap<FolderId, ArenaEntry>,
    roots: Vec<FolderId>,
}

impl FolderArena {
    /// Load records, link parents, and repair malformed links.
    ///
    /// Sibling order follows input order. A duplicated id keeps its first
    /// record; root alias records are never loaded.
    pub fn from_records(records: &[FolderRecord]) -> Self {
        let mut arena = Self::default();
        let mut order = Vec::with_capacity(records.len());

        for record in records {
            if record.id.is_root_alias() {
                debug!(folder_id = %record.id, "Skipping root alias record");
                continue;
            }
            if arena.entries.contains_key(&record.id) {
                warn!(folder_id = %record.id, "Duplicate folder id, keeping first record");
                continue;
            }
            order.push(record.id.clone());
            arena.entries.insert(
                record.id.clone(),
                ArenaEntry {
                    record: record.clone(),
                    parent: None,
                    children: Vec::new(),
                },
            );
        }

        for id in order {
            let requested = arena
                .entries
                .get(&id)
                .and_then(|entry| entry.record.parent_id.clone());

            match requested {
                Some(parent) if arena.can_link(&id, &parent) => {
                    if let Some(entry) = arena.entries.get_mut(&id) {
                        entry.parent = Some(parent.clone());
                    }
                    if let Some(parent_entry) = arena.entries.get_mut(&parent) {
                        parent_entry.children.push(id);
                    }
                }
                Some(parent) => {
                    if !parent.is_root_alias() {
                        debug!(
                            folder_id = %id,
                            parent_id = %parent,
                            "Unresolvable or cyclic parent, treating folder as root"
                        );
                    }
                    arena.roots.push(id);
                }
                None => arena.roots.push(id),
            }
        }

        arena
    }

    /// Number of folders held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the arena holds no folders.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a folder with this id was loaded.
    pub fn contains(&self, id: &FolderId) -> bool {
        self.entries.contains_key(id)
    }

    /// The validated parent of `id` (`None` for roots and unknown ids).
    pub fn parent_of(&self, id: &FolderId) -> Option<&FolderId> {
        self.entries.get(id).and_then(|entry| entry.parent.as_ref())
    }

    /// The record loaded for `id`.
    pub fn record(&self, id: &FolderId) -> Option<&FolderRecord> {
        self.entries.get(id).map(|entry| &entry.record)
    }

    /// Ids strictly below `id`, breadth-first.
    pub fn descendants(&self, id: &FolderId) -> Vec<FolderId> {
        let mut found = Vec::new();
        let mut queue: VecDeque<&FolderId> = self
            .entries
            .get(id)
            .map(|entry| entry.children.iter().collect())
            .unwrap_or_default();

        while let Some(current) = queue.pop_front() {
            found.push(current.clone());
            if let Some(entry) = self.entries.get(current) {
                queue.extend(entry.children.iter());
            }
        }
        found
    }

    /// Build the nested tree.
    pub fn to_tree(&self) -> FolderTree {
        FolderTree::new(
            self.roots
                .iter()
                .filter_map(|id| self.build_node(id))
                .map(TreeNode::Folder)
                .collect(),
        )
    }

    fn build_node(&self, id: &FolderId) -> Option<FolderNode> {
        let entry = self.entries.get(id)?;
        let children = entry
            .children
            .iter()
            .filter_map(|child| self.build_node(child))
            .map(TreeNode::Folder)
            .collect();
        Some(entry.record.to_node().with_children(children))
    }

    fn can_link(&self, child: &FolderId, parent: &FolderId) -> bool {
        !parent.is_root_alias() && self.contains(parent) && !self.creates_cycle(child, parent)
    }

    /// Walk the already-linked ancestors of `parent` looking for `child`.
    fn creates_cycle(&self, child: &FolderId, parent: &FolderId) -> bool {
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            if current == child {
                return true;
            }
            cursor = self.parent_of(current);
        }
        false
    }
}

impl FolderTree {
    /// Convert the authority's flat list into a nested tree.
    pub fn from_records(records: &[FolderRecord]) -> Self {
        FolderArena::from_records(records).to_tree()
    }
}
