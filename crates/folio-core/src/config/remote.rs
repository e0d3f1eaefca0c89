//! Remote folder authority configuration.

use serde::{Deserialize, Serialize};

/// Which folder authority implementation to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteBackend {
    /// The document repository's HTTP API.
    #[default]
    Http,
    /// An in-process authority, optionally seeded from a JSON file.
    Memory,
}

/// Remote authority settings.
///
/// There is no request timeout: in-flight folder edits are awaited until
/// they complete or fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: RemoteBackend,
    /// Base URL of the HTTP API (without trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// JSON file holding a flat folder list used to seed the memory backend.
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            backend: RemoteBackend::default(),
            base_url: default_base_url(),
            seed_file: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}
