//! # folio
//!
//! Folder tree management for a document repository browser.
//!
//! - [`core`]: errors, configuration, identifiers
//! - [`entity`]: folder records, tree shapes, and the pure tree algorithms
//! - [`remote`]: the folder authority boundary (HTTP and in-process)
//! - [`service`]: the edit orchestrator, tree editor, picker, and scope filter

pub use folio_core as core;
pub use folio_entity as entity;
pub use folio_remote as remote;
pub use folio_service as service;

pub use folio_core::config::AppConfig;
pub use folio_core::error::{AppError, ErrorKind};
pub use folio_core::types::FolderId;
pub use folio_entity::folder::{FolderNode, FolderRecord, FolderTree, TreeNode};
pub use folio_remote::{FolderRepository, HttpFolderRepository, MemoryFolderRepository, connect};
pub use folio_service::{
    DestinationPicker, DestinationResolver, FolderBrowser, FolderOperations, FolderScope,
    TreeEditor,
};
