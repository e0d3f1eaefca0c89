//! Folder authority connection setup.

use std::sync::Arc;

use reqwest::Client;
use tracing::info;

use folio_core::config::remote::{RemoteBackend, RemoteConfig};
use folio_core::error::{AppError, ErrorKind};

use crate::repositories::{FolderRepository, HttpFolderRepository, MemoryFolderRepository};

/// Build the folder repository selected by configuration.
pub async fn connect(config: &RemoteConfig) -> Result<Arc<dyn FolderRepository>, AppError> {
    match config.backend {
        RemoteBackend::Http => {
            info!(base_url = %config.base_url, "Connecting to folder service");
            let client = Client::builder().build().map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;
            Ok(Arc::new(HttpFolderRepository::new(client, &config.base_url)))
        }
        RemoteBackend::Memory => {
            let repo = match &config.seed_file {
                Some(path) => MemoryFolderRepository::from_json_file(path).await?,
                None => MemoryFolderRepository::new(),
            };
            info!("Using in-process folder authority");
            Ok(Arc::new(repo))
        }
    }
}
