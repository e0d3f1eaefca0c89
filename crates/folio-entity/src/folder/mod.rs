//! Folder domain entities.

pub mod convert;
pub mod model;
pub mod node;
pub mod tree;

pub use convert::FolderArena;
pub use model::{CreateFolder, FolderRecord, RenameFolder};
pub use node::{FolderNode, NodeKind, TreeNode};
pub use tree::{FolderTree, Folders};
