//! Newtype wrappers around server-assigned string identifiers.
//!
//! Using distinct types prevents accidentally passing a `LeafId` where a
//! `FolderId` is expected. Identifiers are opaque: the client never parses
//! or generates them, it only compares and forwards them.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the synthetic "no folder filter" node.
pub const ROOT_ALIAS_ID: &str = "all";

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap an identifier received from the authority.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string value.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a folder.
    FolderId
);

define_id!(
    /// Unique identifier for a leaf item (a filed document).
    LeafId
);

impl FolderId {
    /// The identifier of the root alias node.
    pub fn root_alias() -> Self {
        Self(ROOT_ALIAS_ID.to_string())
    }

    /// Whether this identifier denotes the root alias node.
    pub fn is_root_alias(&self) -> bool {
        self.0 == ROOT_ALIAS_ID
    }
}
