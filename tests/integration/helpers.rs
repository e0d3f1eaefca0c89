//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use tokio::net::TcpListener;

use folio::core::config::browser::BrowserConfig;
use folio::core::config::remote::{RemoteBackend, RemoteConfig};
use folio::core::traits::AutoConfirm;
use folio::entity::folder::{CreateFolder, RenameFolder};
use folio::{
    AppError, ErrorKind, FolderBrowser, FolderId, FolderOperations, FolderRecord,
    FolderRepository, MemoryFolderRepository,
};

/// Path of the seeded folder list used by file-backed tests.
pub fn fixture_path() -> String {
    format!("{}/tests/fixtures/folders.json", env!("CARGO_MANIFEST_DIR"))
}

/// Projects/Phoenix plus a Meetings folder holding two items.
pub fn sample_records() -> Vec<FolderRecord> {
    vec![
        FolderRecord::new("proj", "Projects", None, 0),
        FolderRecord::new("phoenix", "Phoenix", Some(FolderId::from("proj")), 0),
        FolderRecord::new("meet", "Meetings", None, 2),
    ]
}

/// Test application context
pub struct TestApp {
    /// The in-process folder authority
    pub repo: MemoryFolderRepository,
    /// Orchestrator bound to `repo`
    pub ops: FolderOperations,
}

impl TestApp {
    /// Create an app over `sample_records` that approves every delete
    pub fn new() -> Self {
        Self::with_records(sample_records(), true)
    }

    /// Create an app over `records`
    pub fn with_records(records: Vec<FolderRecord>, confirm: bool) -> Self {
        let repo = MemoryFolderRepository::with_folders(records);
        let ops = FolderOperations::new(Arc::new(repo.clone()), Arc::new(AutoConfirm(confirm)));
        Self { repo, ops }
    }

    /// Create an app seeded from the JSON fixture through the connection
    /// factory
    pub async fn from_fixture() -> Self {
        let config = RemoteConfig {
            backend: RemoteBackend::Memory,
            seed_file: Some(fixture_path()),
            ..RemoteConfig::default()
        };
        let repo = folio::connect(&config).await.expect("seeded authority");
        let records = repo.list_folders().await.expect("list seeded folders");
        Self::with_records(records, true)
    }

    /// A mounted browser with a root alias row
    pub async fn browser(&self, config: BrowserConfig) -> FolderBrowser {
        let mut browser = FolderBrowser::new(self.ops.clone(), config, true);
        browser.mount().await.expect("Failed to mount browser");
        browser
    }
}

/// Serve `repo` over HTTP the way the repository API does and return the
/// base URL (`http://127.0.0.1:{port}/api`).
pub async fn spawn_http_authority(repo: MemoryFolderRepository) -> String {
    let app = Router::new()
        .route("/api/folders", get(list_folders).post(create_folder))
        .route("/api/folders/{id}", put(rename_folder).delete(delete_folder))
        .route("/broken/folders", get(broken))
        .with_state(repo);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}/api")
}

/// A base URL nothing listens on
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api")
}

async fn list_folders(State(repo): State<MemoryFolderRepository>) -> Response {
    match repo.list_folders().await {
        Ok(folders) => Json(folders).into_response(),
        Err(e) => reject(e),
    }
}

async fn create_folder(
    State(repo): State<MemoryFolderRepository>,
    Json(body): Json<CreateFolder>,
) -> Response {
    match repo.create_folder(&body).await {
        Ok(folder) => (StatusCode::CREATED, Json(folder)).into_response(),
        Err(e) => reject(e),
    }
}

async fn rename_folder(
    State(repo): State<MemoryFolderRepository>,
    Path(id): Path<String>,
    Json(body): Json<RenameFolder>,
) -> Response {
    match repo.rename_folder(&FolderId::from(id), &body.name).await {
        Ok(folder) => Json(folder).into_response(),
        Err(e) => reject(e),
    }
}

async fn delete_folder(
    State(repo): State<MemoryFolderRepository>,
    Path(id): Path<String>,
) -> Response {
    match repo.delete_folder(&FolderId::from(id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => reject(e),
    }
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

fn reject(err: AppError) -> Response {
    let status = match err.kind {
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "detail": err.message }))).into_response()
}
