//! HTTP folder repository for the document repository API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use folio_core::error::{AppError, ErrorKind};
use folio_core::result::AppResult;
use folio_core::types::FolderId;
use folio_entity::folder::{CreateFolder, FolderRecord, RenameFolder};

use super::FolderRepository;

/// Error body returned by the API (`{"detail": ...}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Folder repository backed by the repository's REST API.
///
/// Endpoints, relative to the base URL: `GET /folders`, `POST /folders`,
/// `PUT /folders/{id}`, `DELETE /folders/{id}`.
#[derive(Debug, Clone)]
pub struct HttpFolderRepository {
    client: Client,
    base_url: String,
}

impl HttpFolderRepository {
    /// Create a repository using an existing HTTP client.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn folders_url(&self) -> String {
        format!("{}/folders", self.base_url)
    }

    /// URL of one folder. The id is percent-encoded as a single path
    /// segment.
    fn folder_url(&self, id: &FolderId) -> AppResult<Url> {
        let invalid = || {
            AppError::configuration(format!("Invalid folder service URL '{}'", self.base_url))
        };
        let mut url = Url::parse(&self.folders_url()).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl FolderRepository for HttpFolderRepository {
    async fn list_folders(&self) -> AppResult<Vec<FolderRecord>> {
        let response = self
            .client
            .get(self.folders_url())
            .send()
            .await
            .map_err(transport_failure)?;
        decode(response).await
    }

    async fn create_folder(&self, data: &CreateFolder) -> AppResult<FolderRecord> {
        let response = self
            .client
            .post(self.folders_url())
            .json(data)
            .send()
            .await
            .map_err(transport_failure)?;
        decode(response).await
    }

    async fn rename_folder(&self, id: &FolderId, name: &str) -> AppResult<FolderRecord> {
        let body = RenameFolder {
            name: name.to_string(),
        };
        let response = self
            .client
            .put(self.folder_url(id)?)
            .json(&body)
            .send()
            .await
            .map_err(transport_failure)?;
        decode(response).await
    }

    async fn delete_folder(&self, id: &FolderId) -> AppResult<()> {
        let response = self
            .client
            .delete(self.folder_url(id)?)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_from_response(status, &body))
    }
}

fn transport_failure(err: reqwest::Error) -> AppError {
    warn!(error = %err, "Folder service request failed");
    AppError::with_source(
        ErrorKind::Transport,
        format!("Folder service unreachable: {err}"),
        err,
    )
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Transport,
                "Malformed response from folder service",
                e,
            )
        });
    }
    let body = response.text().await.unwrap_or_default();
    Err(error_from_response(status, &body))
}

/// Translate a failed HTTP response into an [`AppError`].
///
/// Client errors are business-rule rejections (`Conflict`); server errors
/// are `Transport`. The `detail` field is used verbatim when present.
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> AppError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .map(|detail| match detail {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        });

    let kind = if status.is_client_error() {
        ErrorKind::Conflict
    } else {
        ErrorKind::Transport
    };

    debug!(status = status.as_u16(), kind = %kind, "Folder service rejected request");
    AppError::remote(kind, detail)
}
