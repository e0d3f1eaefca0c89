//! Folder records as exchanged with the remote authority.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::types::FolderId;

use super::node::FolderNode;

/// A folder as listed by the remote authority (flat, parent by id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    /// Unique folder identifier, assigned by the authority.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for root folders).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// Cached number of items filed within this folder's branch.
    #[serde(default)]
    pub count: u64,
    /// When the folder was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl FolderRecord {
    /// Build a record stamped with the current time.
    pub fn new(
        id: impl Into<FolderId>,
        name: impl Into<String>,
        parent_id: Option<FolderId>,
        count: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            count,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// The tree node for this record, with no children attached yet.
    pub fn to_node(&self) -> FolderNode {
        FolderNode::new(self.id.clone(), self.name.clone(), self.count)
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name, already trimmed.
    pub name: String,
    /// Parent folder (None for root).
    pub parent_id: Option<FolderId>,
}

/// Body of a rename request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameFolder {
    /// The new folder name, already trimmed.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_authority_json() {
        let json = r#"{
            "id": "folder_proj_phoenix",
            "name": "Project Phoenix",
            "parent_id": "folder_proj",
            "created_at": "2023-01-10T09:01:00Z",
            "count": 1,
            "updated_at": "2024-01-15T10:30:00Z"
        }"#;
        let record: FolderRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.id.as_str(), "folder_proj_phoenix");
        assert_eq!(record.parent_id, Some(FolderId::from("folder_proj")));
        assert_eq!(record.count, 1);
        assert!(!record.is_root());
    }

    #[test]
    fn test_record_defaults() {
        let record: FolderRecord =
            serde_json::from_str(r#"{"id": "folder_training", "name": "Training"}"#)
                .expect("minimal record");
        assert!(record.is_root());
        assert_eq!(record.count, 0);
    }

    #[test]
    fn test_to_node_starts_empty() {
        let node = FolderRecord::new("f1", "Meetings", None, 3).to_node();
        assert_eq!(node.name, "Meetings");
        assert_eq!(node.count, 3);
        assert!(node.children.is_empty());
    }
}
