//! Folder edits reconciled with the remote authority.

pub mod operations;

pub use operations::{CreateOutcome, DeleteOutcome, FolderOperations};
