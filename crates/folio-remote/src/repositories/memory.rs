//! In-process folder authority.
//!
//! Holds the authoritative folder list behind one lock so every call is a
//! single atomic transaction, and applies the same business rules as the
//! repository service: unknown ids and non-empty branches are rejected,
//! deletes cascade to the whole subtree, and the root alias is never
//! persisted.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::types::FolderId;
use folio_entity::folder::{CreateFolder, FolderArena, FolderRecord};
use folio_entity::leaf::LeafItem;

use super::FolderRepository;

/// Number of calls received per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoteCalls {
    /// `list_folders` calls.
    pub list: u64,
    /// `create_folder` calls.
    pub create: u64,
    /// `rename_folder` calls.
    pub rename: u64,
    /// `delete_folder` calls.
    pub delete: u64,
}

impl RemoteCalls {
    /// Calls that could have changed folder structure.
    pub fn writes(&self) -> u64 {
        self.create + self.rename + self.delete
    }
}

#[derive(Debug, Default)]
struct CallCounters {
    list: AtomicU64,
    create: AtomicU64,
    rename: AtomicU64,
    delete: AtomicU64,
}

#[derive(Debug, Default)]
struct MemoryState {
    folders: Vec<FolderRecord>,
    items: Vec<LeafItem>,
}

/// Folder authority kept in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFolderRepository {
    state: Arc<RwLock<MemoryState>>,
    counters: Arc<CallCounters>,
    offline: Arc<AtomicBool>,
}

impl MemoryFolderRepository {
    /// Create an empty authority.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an authority holding `folders`. Counts are taken as given.
    pub fn with_folders(folders: Vec<FolderRecord>) -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState {
                folders,
                items: Vec::new(),
            })),
            ..Self::default()
        }
    }

    /// Load a flat JSON folder list from disk.
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read seed file '{}'", path.display()),
                e,
            )
        })?;
        let folders: Vec<FolderRecord> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), folders = folders.len(), "Seeded memory folder authority");
        Ok(Self::with_folders(folders))
    }

    /// File an item under a folder, raising the cached count of that folder
    /// and every ancestor.
    pub async fn file_item(&self, item: LeafItem) -> AppResult<()> {
        let mut state = self.state.write().await;
        let arena = FolderArena::from_records(&state.folders);
        if !arena.contains(&item.folder_id) {
            return Err(AppError::conflict("Folder not found."));
        }

        let mut branch = vec![item.folder_id.clone()];
        let mut cursor = arena.parent_of(&item.folder_id);
        while let Some(parent) = cursor {
            branch.push(parent.clone());
            cursor = arena.parent_of(parent);
        }
        for folder in state.folders.iter_mut().filter(|f| branch.contains(&f.id)) {
            folder.count += 1;
        }
        state.items.push(item);
        Ok(())
    }

    /// Items filed so far.
    pub async fn items(&self) -> Vec<LeafItem> {
        self.state.read().await.items.clone()
    }

    /// Snapshot of the stored folder list.
    pub async fn folders(&self) -> Vec<FolderRecord> {
        self.state.read().await.folders.clone()
    }

    /// Make every subsequent call fail with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Calls received so far.
    pub fn calls(&self) -> RemoteCalls {
        RemoteCalls {
            list: self.counters.list.load(Ordering::SeqCst),
            create: self.counters.create.load(Ordering::SeqCst),
            rename: self.counters.rename.load(Ordering::SeqCst),
            delete: self.counters.delete.load(Ordering::SeqCst),
        }
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::transport("Folder service unreachable"));
        }
        Ok(())
    }
}

#[async_trait]
impl FolderRepository for MemoryFolderRepository {
    async fn list_folders(&self) -> AppResult<Vec<FolderRecord>> {
        self.counters.list.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;
        Ok(self.state.read().await.folders.clone())
    }

    async fn create_folder(&self, data: &CreateFolder) -> AppResult<FolderRecord> {
        self.counters.create.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        let name = data.name.trim();
        if name.is_empty() {
            return Err(AppError::conflict("Folder name cannot be empty."));
        }

        let mut state = self.state.write().await;
        let parent_id = data.parent_id.clone().filter(|p| !p.is_root_alias());
        if let Some(parent) = &parent_id {
            if !state.folders.iter().any(|f| f.id == *parent) {
                return Err(AppError::conflict("Parent folder not found."));
            }
        }

        let record = FolderRecord::new(Uuid::new_v4().to_string(), name, parent_id, 0);
        state.folders.push(record.clone());
        debug!(folder_id = %record.id, name = %record.name, "Memory authority created folder");
        Ok(record)
    }

    async fn rename_folder(&self, id: &FolderId, name: &str) -> AppResult<FolderRecord> {
        self.counters.rename.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        if id.is_root_alias() {
            return Err(AppError::conflict("Cannot rename the root view."));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::conflict("Folder name cannot be empty."));
        }

        let mut state = self.state.write().await;
        let folder = state
            .folders
            .iter_mut()
            .find(|f| f.id == *id)
            .ok_or_else(|| AppError::conflict("Folder not found."))?;
        folder.name = name.to_string();
        folder.updated_at = Utc::now();
        Ok(folder.clone())
    }

    async fn delete_folder(&self, id: &FolderId) -> AppResult<()> {
        self.counters.delete.fetch_add(1, Ordering::SeqCst);
        self.ensure_online()?;

        if id.is_root_alias() {
            return Err(AppError::conflict("Cannot delete the root view."));
        }

        let mut state = self.state.write().await;
        let arena = FolderArena::from_records(&state.folders);
        if !arena.contains(id) {
            return Err(AppError::conflict("Folder not found."));
        }

        let mut branch = arena.descendants(id);
        branch.push(id.clone());
        let occupied = branch
            .iter()
            .filter_map(|member| arena.record(member))
            .any(|record| record.count > 0)
            || state.items.iter().any(|item| branch.contains(&item.folder_id));
        if occupied {
            return Err(AppError::conflict("Cannot delete folder: it contains items."));
        }

        state.folders.retain(|f| !branch.contains(&f.id));
        debug!(folder_id = %id, removed = branch.len(), "Memory authority deleted branch");
        Ok(())
    }
}
