//! Integration tests for the HTTP folder repository.

mod helpers;

use std::sync::Arc;

use folio::core::error::FALLBACK_MESSAGE;
use folio::core::traits::AutoConfirm;
use folio::entity::folder::CreateFolder;
use folio::{
    ErrorKind, FolderId, FolderOperations, FolderRecord, FolderRepository, HttpFolderRepository,
    MemoryFolderRepository,
};
use pretty_assertions::assert_eq;

async fn http_repo(authority: &MemoryFolderRepository) -> HttpFolderRepository {
    let base_url = helpers::spawn_http_authority(authority.clone()).await;
    HttpFolderRepository::new(reqwest::Client::new(), base_url)
}

#[tokio::test]
async fn test_list_and_create_over_http() {
    let authority = MemoryFolderRepository::with_folders(helpers::sample_records());
    let repo = http_repo(&authority).await;

    let folders = repo.list_folders().await.expect("list");
    assert_eq!(folders.len(), 3);

    let created = repo
        .create_folder(&CreateFolder {
            name: "Archive".to_string(),
            parent_id: None,
        })
        .await
        .expect("create");
    assert_eq!(created.count, 0);
    assert!(created.is_root());
    assert_eq!(authority.folders().await.len(), 4);
}

#[tokio::test]
async fn test_business_rejection_is_conflict_with_detail() {
    let authority = MemoryFolderRepository::with_folders(helpers::sample_records());
    let repo = http_repo(&authority).await;

    let err = repo
        .delete_folder(&FolderId::from("meet"))
        .await
        .expect_err("branch holds items");
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "Cannot delete folder: it contains items.");

    let err = repo
        .rename_folder(&FolderId::from("ghost"), "X")
        .await
        .expect_err("unknown id");
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_ids_with_reserved_characters_reach_their_folder() {
    let authority = MemoryFolderRepository::with_folders(vec![FolderRecord::new(
        "team/alpha?v=1",
        "Alpha",
        None,
        0,
    )]);
    let repo = http_repo(&authority).await;
    let id = FolderId::from("team/alpha?v=1");

    let renamed = repo.rename_folder(&id, "Beta").await.expect("rename");
    assert_eq!(renamed.id, id);
    assert_eq!(renamed.name, "Beta");

    repo.delete_folder(&id).await.expect("delete");
    assert!(authority.folders().await.is_empty());
}

#[tokio::test]
async fn test_server_failure_without_detail_uses_fallback() {
    let base_url = helpers::spawn_http_authority(MemoryFolderRepository::new()).await;
    let broken = base_url.replace("/api", "/broken");
    let repo = HttpFolderRepository::new(reqwest::Client::new(), broken);

    let err = repo.list_folders().await.expect_err("500");
    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(err.message, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_service_is_transport() {
    let repo = HttpFolderRepository::new(reqwest::Client::new(), helpers::closed_base_url().await);
    let err = repo.list_folders().await.expect_err("nothing listening");
    assert_eq!(err.kind, ErrorKind::Transport);
}

#[tokio::test]
async fn test_orchestrator_over_http() {
    let authority = MemoryFolderRepository::with_folders(helpers::sample_records());
    let repo = http_repo(&authority).await;
    let ops = FolderOperations::new(Arc::new(repo), Arc::new(AutoConfirm(true)));

    let tree = ops.load().await.expect("load");
    let next = ops
        .rename(&tree, &FolderId::from("phoenix"), "Apollo", "Phoenix")
        .await
        .expect("rename");
    assert_eq!(
        next.path_to(&FolderId::from("phoenix")),
        Some(vec!["Projects".to_string(), "Apollo".to_string()])
    );
    assert_eq!(ops.load().await.expect("reload"), next);
}
