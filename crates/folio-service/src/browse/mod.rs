//! Interactive folder browsing.

pub mod browser;
pub mod editor;

pub use browser::FolderBrowser;
pub use editor::{CommitTrigger, EditMode, EditorEvent, RowKind, TreeEditor, TreeRow};
