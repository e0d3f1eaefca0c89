//! Per-view expansion, selection, and inline edit state.
//!
//! The editor never talks to the authority. Committing an inline edit
//! yields an [`EditorEvent`] that the owner hands to
//! [`FolderOperations`](crate::folder::FolderOperations). At most one
//! inline edit exists per tree; starting another replaces it.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use folio_core::config::browser::BrowserConfig;
use folio_core::error::AppError;
use folio_core::types::FolderId;
use folio_entity::folder::{FolderNode, FolderTree, TreeNode};

/// The inline edit in progress, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// No inline edit.
    #[default]
    Idle,
    /// Renaming an existing folder.
    Renaming {
        /// Folder being renamed.
        node_id: FolderId,
        /// Name before the edit started.
        original: String,
        /// Current input text.
        text: String,
    },
    /// Typing the name of a new child folder.
    AddingChild {
        /// Parent folder, `None` for root level.
        parent_id: Option<FolderId>,
        /// Current input text.
        text: String,
    },
}

impl EditMode {
    /// Whether an inline edit is open.
    pub fn is_editing(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// What ended an inline edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    /// Explicit confirm (Enter, check button).
    Confirm,
    /// The input lost focus.
    FocusLoss,
}

/// Notification emitted to the owner of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// A folder (or the root alias) was selected.
    Selected(FolderId),
    /// The selection was cleared.
    Deselected,
    /// Rename `id` from `old_name` to `new_name`.
    CommitRename {
        /// Folder to rename.
        id: FolderId,
        /// Trimmed new name.
        new_name: String,
        /// Name before the edit.
        old_name: String,
    },
    /// Create a folder named `name` under `parent_id`.
    CommitCreate {
        /// Parent folder, `None` for root level.
        parent_id: Option<FolderId>,
        /// Trimmed folder name.
        name: String,
    },
}

/// Kind of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// The synthetic "All" row.
    RootAlias,
    /// A folder.
    Folder,
    /// A leaf item shown under its folder.
    Leaf,
    /// The inline input for a new folder.
    NewFolder,
}

/// One visible line of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    /// Row kind.
    pub kind: RowKind,
    /// Node id; `None` for the new folder input.
    pub id: Option<String>,
    /// Name, or the current input text while editing.
    pub label: String,
    /// Nesting depth, 0 for top-level rows.
    pub depth: usize,
    /// Cached item count for folders.
    pub count: Option<u64>,
    /// Whether an expand toggle is offered.
    pub expandable: bool,
    /// Whether the row is expanded.
    pub expanded: bool,
    /// Whether the row is the current selection.
    pub selected: bool,
    /// Whether the row is an open inline input.
    pub editing: bool,
    /// Whether an authority call for this folder is outstanding.
    pub pending: bool,
}

/// Interactive state for one rendered folder tree.
#[derive(Debug, Clone)]
pub struct TreeEditor {
    config: BrowserConfig,
    with_root_alias: bool,
    expanded: HashSet<FolderId>,
    selected: Option<FolderId>,
    mode: EditMode,
    pending: HashSet<FolderId>,
}

impl TreeEditor {
    /// Create an editor. Views with a root alias show an "All" row above the
    /// tree; pickers usually do not.
    pub fn new(config: BrowserConfig, with_root_alias: bool) -> Self {
        Self {
            config,
            with_root_alias,
            expanded: HashSet::new(),
            selected: None,
            mode: EditMode::Idle,
            pending: HashSet::new(),
        }
    }

    /// Browser settings in effect.
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Whether this view shows the root alias row.
    pub fn has_root_alias(&self) -> bool {
        self.with_root_alias
    }

    /// Currently selected id.
    pub fn selected(&self) -> Option<&FolderId> {
        self.selected.as_ref()
    }

    /// The inline edit in progress.
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: &FolderId) -> bool {
        self.expanded.contains(id)
    }

    /// Whether an authority call for `id` is outstanding.
    pub fn is_pending(&self, id: &FolderId) -> bool {
        self.pending.contains(id)
    }

    /// Whether an expand toggle is offered for `id`.
    pub fn can_expand(&self, tree: &FolderTree, id: &FolderId) -> bool {
        if id.is_root_alias() {
            return self.with_root_alias && !tree.is_empty();
        }
        tree.find_by_id(id)
            .is_some_and(|folder| self.folder_expandable(folder))
    }

    /// Flip the expansion of `id`. Returns the new state; ids without a
    /// toggle stay collapsed.
    pub fn toggle_expand(&mut self, tree: &FolderTree, id: &FolderId) -> bool {
        if !self.can_expand(tree, id) {
            return false;
        }
        if self.expanded.remove(id) {
            debug!(folder_id = %id, "Collapsed");
            false
        } else {
            debug!(folder_id = %id, "Expanded");
            self.expanded.insert(id.clone());
            true
        }
    }

    /// Expand every ancestor of `id` so its row is visible.
    pub fn reveal(&mut self, tree: &FolderTree, id: &FolderId) {
        let mut cursor = tree.parent_id(id);
        while let Some(parent) = cursor {
            cursor = tree.parent_id(&parent);
            self.expanded.insert(parent);
        }
        if self.with_root_alias && tree.contains(id) {
            self.expanded.insert(FolderId::root_alias());
        }
    }

    /// Select `id` and notify the owner.
    ///
    /// Selection does not expand ordinary folders. Selecting the root alias
    /// also flips its expansion.
    pub fn select(&mut self, tree: &FolderTree, id: &FolderId) -> EditorEvent {
        if id.is_root_alias() && self.with_root_alias {
            self.toggle_expand(tree, id);
        }
        debug!(folder_id = %id, "Selected");
        self.selected = Some(id.clone());
        EditorEvent::Selected(id.clone())
    }

    /// Open an inline rename for `id`, replacing any other inline edit.
    pub fn start_rename(&mut self, tree: &FolderTree, id: &FolderId) -> Result<(), AppError> {
        if id.is_root_alias() {
            return Err(AppError::validation("The root folder cannot be renamed"));
        }
        if self.is_pending(id) {
            return Err(AppError::validation("An edit of this folder is in progress"));
        }
        let folder = tree
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Folder '{id}' not found")))?;

        debug!(folder_id = %id, "Rename started");
        self.mode = EditMode::Renaming {
            node_id: id.clone(),
            original: folder.name.clone(),
            text: folder.name.clone(),
        };
        Ok(())
    }

    /// Open an inline "new folder" input under `parent` (root when `None`
    /// or the root alias), replacing any other inline edit.
    ///
    /// The parent becomes the selection. A root-level add selects the root
    /// alias, or clears the selection in views without one. Returns the
    /// selection event when the selection changed.
    pub fn start_add_child(
        &mut self,
        tree: &FolderTree,
        parent: Option<&FolderId>,
    ) -> Result<Option<EditorEvent>, AppError> {
        let parent = parent.filter(|p| !p.is_root_alias());
        match parent {
            Some(parent_id) => {
                if !tree.contains(parent_id) {
                    return Err(AppError::not_found(format!("Folder '{parent_id}' not found")));
                }
                self.expanded.insert(parent_id.clone());
            }
            None if self.with_root_alias => {
                self.expanded.insert(FolderId::root_alias());
            }
            None => {}
        }

        debug!(parent_id = ?parent, "Add child started");
        self.mode = EditMode::AddingChild {
            parent_id: parent.cloned(),
            text: self.config.new_folder_name.clone(),
        };

        let next = parent.cloned().or_else(|| self.fallback_selection());
        if next == self.selected {
            return Ok(None);
        }
        self.selected = next.clone();
        Ok(Some(match next {
            Some(id) => EditorEvent::Selected(id),
            None => EditorEvent::Deselected,
        }))
    }

    /// Replace the text of the open inline input.
    pub fn update_text(&mut self, input: &str) {
        match &mut self.mode {
            EditMode::Renaming { text, .. } | EditMode::AddingChild { text, .. } => {
                *text = input.to_string();
            }
            EditMode::Idle => {}
        }
    }

    /// Close the inline edit, keeping its text.
    ///
    /// Returns an event only for a non-empty trimmed name that differs from
    /// the original; anything else is discarded silently.
    pub fn commit(&mut self, trigger: CommitTrigger) -> Option<EditorEvent> {
        let mode = std::mem::take(&mut self.mode);
        debug!(?trigger, "Inline edit committed");
        match mode {
            EditMode::Idle => None,
            EditMode::Renaming {
                node_id,
                original,
                text,
            } => {
                let name = text.trim();
                (!name.is_empty() && name != original).then(|| EditorEvent::CommitRename {
                    id: node_id,
                    new_name: name.to_string(),
                    old_name: original,
                })
            }
            EditMode::AddingChild { parent_id, text } => {
                let name = text.trim();
                (!name.is_empty()).then(|| EditorEvent::CommitCreate {
                    parent_id,
                    name: name.to_string(),
                })
            }
        }
    }

    /// Discard the inline edit, whatever was typed.
    pub fn cancel(&mut self) {
        if self.mode.is_editing() {
            debug!("Inline edit cancelled");
        }
        self.mode = EditMode::Idle;
    }

    /// Whether a delete action is offered for `id`.
    ///
    /// Only existing, idle folders with a cached count of zero qualify. The
    /// authority still decides when the delete is sent.
    pub fn can_delete(&self, tree: &FolderTree, id: &FolderId) -> bool {
        !id.is_root_alias()
            && !self.is_pending(id)
            && tree.find_by_id(id).is_some_and(|folder| folder.count == 0)
    }

    /// Mark an authority call for `id` as outstanding.
    pub fn mark_pending(&mut self, id: &FolderId) {
        self.pending.insert(id.clone());
    }

    /// Clear the outstanding mark for `id`.
    pub fn clear_pending(&mut self, id: &FolderId) {
        self.pending.remove(id);
    }

    /// Forget every id in `removed` after a successful delete, closing an
    /// inline edit that targets one of them.
    pub fn on_removed(&mut self, removed: &HashSet<FolderId>) {
        let targets_removed = match &self.mode {
            EditMode::Idle => false,
            EditMode::Renaming { node_id, .. } => removed.contains(node_id),
            EditMode::AddingChild { parent_id, .. } => {
                parent_id.as_ref().is_some_and(|p| removed.contains(p))
            }
        };
        if targets_removed {
            self.mode = EditMode::Idle;
        }
        self.expanded.retain(|id| !removed.contains(id));
        self.pending.retain(|id| !removed.contains(id));
        if self.selected.as_ref().is_some_and(|s| removed.contains(s)) {
            self.selected = None;
        }
    }

    /// Selection used when the selected folder disappears: the root alias,
    /// or nothing in views without one.
    pub fn fallback_selection(&self) -> Option<FolderId> {
        self.with_root_alias.then(FolderId::root_alias)
    }

    /// Replace the selection without emitting an event.
    pub fn set_selected(&mut self, id: Option<FolderId>) {
        self.selected = id;
    }

    /// Reconcile with a freshly fetched tree.
    ///
    /// The inline edit is cancelled, expansions of vanished folders are
    /// dropped, and a vanished selection falls back to the root alias (or
    /// nothing for views without one).
    pub fn on_tree_refreshed(&mut self, tree: &FolderTree) {
        self.mode = EditMode::Idle;
        self.expanded
            .retain(|id| id.is_root_alias() || tree.contains(id));
        self.pending.retain(|id| tree.contains(id));

        let vanished = self
            .selected
            .as_ref()
            .is_some_and(|id| !id.is_root_alias() && !tree.contains(id));
        if vanished {
            self.selected = self.fallback_selection();
        }
    }

    /// Flatten the visible part of `tree` into rows.
    pub fn rows(&self, tree: &FolderTree) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        let alias = FolderId::root_alias();

        let base_depth = if self.with_root_alias {
            let expanded = self.is_expanded(&alias);
            rows.push(TreeRow {
                kind: RowKind::RootAlias,
                id: Some(alias.to_string()),
                label: self.config.root_alias_name.clone(),
                depth: 0,
                count: None,
                expandable: self.can_expand(tree, &alias),
                expanded,
                selected: self.selected.as_ref() == Some(&alias),
                editing: false,
                pending: false,
            });
            let adding_root = self.adding_under(None);
            if adding_root {
                rows.push(self.new_folder_row(1));
            }
            if !expanded && !adding_root {
                return rows;
            }
            1
        } else {
            0
        };

        self.push_level(tree.roots(), base_depth, &mut rows);
        if !self.with_root_alias && self.adding_under(None) {
            rows.push(self.new_folder_row(0));
        }
        rows
    }

    fn push_level(&self, nodes: &[TreeNode], depth: usize, rows: &mut Vec<TreeRow>) {
        for node in self.ordered(nodes) {
            match node {
                TreeNode::Folder(folder) => {
                    let expanded = self.is_expanded(&folder.id);
                    rows.push(self.folder_row(folder, depth, expanded));
                    if self.adding_under(Some(&folder.id)) {
                        rows.push(self.new_folder_row(depth + 1));
                    }
                    if expanded {
                        self.push_level(&folder.children, depth + 1, rows);
                    }
                }
                TreeNode::Leaf(leaf) if self.config.show_files => rows.push(TreeRow {
                    kind: RowKind::Leaf,
                    id: Some(leaf.id.to_string()),
                    label: leaf.name.clone(),
                    depth,
                    count: None,
                    expandable: false,
                    expanded: false,
                    selected: false,
                    editing: false,
                    pending: false,
                }),
                TreeNode::Leaf(_) => {}
            }
        }
    }

    fn adding_under(&self, parent: Option<&FolderId>) -> bool {
        matches!(
            &self.mode,
            EditMode::AddingChild { parent_id, .. } if parent_id.as_ref() == parent
        )
    }

    fn new_folder_row(&self, depth: usize) -> TreeRow {
        let label = match &self.mode {
            EditMode::AddingChild { text, .. } => text.clone(),
            _ => String::new(),
        };
        TreeRow {
            kind: RowKind::NewFolder,
            id: None,
            label,
            depth,
            count: None,
            expandable: false,
            expanded: false,
            selected: false,
            editing: true,
            pending: false,
        }
    }

    fn folder_row(&self, folder: &FolderNode, depth: usize, expanded: bool) -> TreeRow {
        let (label, editing) = match &self.mode {
            EditMode::Renaming { node_id, text, .. } if *node_id == folder.id => {
                (text.clone(), true)
            }
            _ => (folder.name.clone(), false),
        };
        TreeRow {
            kind: RowKind::Folder,
            id: Some(folder.id.to_string()),
            label,
            depth,
            count: Some(folder.count),
            expandable: self.folder_expandable(folder),
            expanded,
            selected: self.selected.as_ref() == Some(&folder.id),
            editing,
            pending: self.is_pending(&folder.id),
        }
    }

    fn folder_expandable(&self, folder: &FolderNode) -> bool {
        folder.has_subfolders() || (self.config.show_files && !folder.children.is_empty())
    }

    /// Siblings in presentation order: folders first, each group sorted by
    /// the configured name order (stable, so `Input` keeps authority order).
    fn ordered<'a>(&self, nodes: &'a [TreeNode]) -> Vec<&'a TreeNode> {
        let mut ordered: Vec<&TreeNode> = nodes.iter().collect();
        ordered.sort_by(|a, b| {
            b.is_folder()
                .cmp(&a.is_folder())
                .then_with(|| self.config.sort.compare(a.name(), b.name()))
        });
        ordered
    }
}
