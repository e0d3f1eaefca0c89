//! Tree browsing and inline editing configuration.

use serde::{Deserialize, Serialize};

use crate::types::sorting::NameOrder;

/// Settings shared by every folder tree view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Display name of the synthetic "no folder filter" node.
    #[serde(default = "default_root_alias_name")]
    pub root_alias_name: String,
    /// Placeholder seeded into the inline "add folder" input.
    #[serde(default = "default_new_folder_name")]
    pub new_folder_name: String,
    /// Whether views render leaf items beneath their folders.
    #[serde(default)]
    pub show_files: bool,
    /// Re-list folders from the authority after each successful edit instead
    /// of keeping the locally edited snapshot.
    #[serde(default)]
    pub refetch_after_edit: bool,
    /// Presentation order of sibling rows.
    #[serde(default)]
    pub sort: NameOrder,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            root_alias_name: default_root_alias_name(),
            new_folder_name: default_new_folder_name(),
            show_files: false,
            refetch_after_edit: false,
            sort: NameOrder::default(),
        }
    }
}

fn default_root_alias_name() -> String {
    "All".to_string()
}

fn default_new_folder_name() -> String {
    "New Folder".to_string()
}
