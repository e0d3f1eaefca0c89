//! # folio-service
//!
//! Folder tree use cases for Folio. The orchestrator sequences calls to the
//! folder authority with pure tree edits, the editor tracks per-view
//! expansion, selection and inline edits, and the picker and scope modules
//! build on both.
//!
//! Services follow constructor injection: the repository and confirmation
//! collaborators are provided at construction time as `Arc` references.

pub mod browse;
pub mod folder;
pub mod picker;
pub mod scope;

pub use browse::{
    CommitTrigger, EditMode, EditorEvent, FolderBrowser, RowKind, TreeEditor, TreeRow,
};
pub use folder::{CreateOutcome, DeleteOutcome, FolderOperations};
pub use picker::{DestinationPicker, DestinationResolver};
pub use scope::FolderScope;
