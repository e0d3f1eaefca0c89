//! Folder repository contract and implementations.

pub mod http;
pub mod memory;

use async_trait::async_trait;

use folio_core::result::AppResult;
use folio_core::types::FolderId;
use folio_entity::folder::{CreateFolder, FolderRecord};

pub use http::HttpFolderRepository;
pub use memory::{MemoryFolderRepository, RemoteCalls};

/// Persistence contract of the remote folder authority.
///
/// Each call is one remote round trip and is atomic on the authority's
/// side. Failures carry the authority's reason as the error message:
/// business-rule rejections are `Conflict`, everything else `Transport`.
#[async_trait]
pub trait FolderRepository: Send + Sync + std::fmt::Debug + 'static {
    /// List every folder as a flat sequence.
    async fn list_folders(&self) -> AppResult<Vec<FolderRecord>>;

    /// Create a folder and return the stored record (count 0).
    async fn create_folder(&self, data: &CreateFolder) -> AppResult<FolderRecord>;

    /// Rename a folder and return the updated record.
    async fn rename_folder(&self, id: &FolderId, name: &str) -> AppResult<FolderRecord>;

    /// Delete a folder and its whole subtree.
    ///
    /// The authority rejects the call when the branch still holds items.
    async fn delete_folder(&self, id: &FolderId) -> AppResult<()>;
}
