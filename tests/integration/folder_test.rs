//! Integration tests for folder edits reconciled with the authority.

mod helpers;

use std::collections::HashSet;
use std::sync::Arc;

use folio::core::error::FALLBACK_MESSAGE;
use folio::core::traits::AutoConfirm;
use folio::service::DeleteOutcome;
use folio::{
    ErrorKind, FolderId, FolderOperations, FolderTree, HttpFolderRepository,
    MemoryFolderRepository,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_rename_to_current_name_is_a_no_op() {
    let app = helpers::TestApp::new();
    let tree = app.ops.load().await.expect("load");
    let phoenix = FolderId::from("phoenix");

    let next = app
        .ops
        .rename(&tree, &phoenix, "  Phoenix ", "Phoenix")
        .await
        .expect("rename");

    assert_eq!(next, tree);
    assert_eq!(app.repo.calls().rename, 0);
}

#[tokio::test]
async fn test_rename_changes_only_the_path_tail() {
    let app = helpers::TestApp::new();
    let tree = app.ops.load().await.expect("load");
    let phoenix = FolderId::from("phoenix");

    let next = app
        .ops
        .rename(&tree, &phoenix, "Apollo", "Phoenix")
        .await
        .expect("rename");

    assert_eq!(
        next.path_to(&phoenix),
        Some(vec!["Projects".to_string(), "Apollo".to_string()])
    );
    assert_eq!(next.folder_count(), tree.folder_count());

    let refetched = app.ops.load().await.expect("reload");
    assert_eq!(refetched, next);
}

#[tokio::test]
async fn test_delete_of_counted_folder_leaves_tree_unchanged() {
    let app = helpers::TestApp::new();
    let tree = app.ops.load().await.expect("load");
    let snapshot = tree.clone();

    let err = app
        .ops
        .delete(&tree, &FolderId::from("meet"), "Meetings", None)
        .await
        .expect_err("branch holds items");

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "Cannot delete folder: it contains items.");
    assert_eq!(tree, snapshot);
    assert_eq!(app.repo.folders().await.len(), 3);
}

#[tokio::test]
async fn test_archive_appended_at_root() {
    let app = helpers::TestApp::new();
    let tree = app.ops.load().await.expect("load");

    let outcome = app.ops.create(&tree, None, "Archive").await.expect("create");

    let last = outcome.tree.roots().last().expect("root entry");
    assert_eq!(last.name(), "Archive");
    assert_eq!(last.id(), outcome.folder_id.as_str());
    assert_eq!(
        outcome.tree.descendant_closure(&outcome.folder_id),
        HashSet::from([outcome.folder_id.clone()])
    );
}

#[tokio::test]
async fn test_delete_cascades_and_matches_authority() {
    let app = helpers::TestApp::new();
    let tree = app.ops.load().await.expect("load");

    let outcome = app
        .ops
        .delete(&tree, &FolderId::from("proj"), "Projects", Some(&FolderId::from("phoenix")))
        .await
        .expect("delete");

    let DeleteOutcome::Deleted { tree: next, reselect } = outcome else {
        panic!("expected the delete to go through");
    };
    assert_eq!(reselect, Some(FolderId::root_alias()));
    assert!(!next.contains(&FolderId::from("phoenix")));
    assert_eq!(app.ops.load().await.expect("reload"), next);
}

#[tokio::test]
async fn test_failures_surface_detail_or_fallback() {
    let app = helpers::TestApp::new();
    let tree = app.ops.load().await.expect("load");

    let err = app
        .ops
        .rename(&tree, &FolderId::from("ghost"), "X", "Ghost")
        .await
        .expect_err("unknown id");
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "Folder not found.");

    app.repo.set_offline(true);
    let err = app
        .ops
        .create(&FolderTree::empty(), None, "Archive")
        .await
        .expect_err("offline");
    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(err.message, "Folder service unreachable");

    let base_url = helpers::spawn_http_authority(MemoryFolderRepository::new()).await;
    let broken_url = base_url.replace("/api", "/broken");
    let broken = HttpFolderRepository::new(reqwest::Client::new(), broken_url);
    let ops = FolderOperations::new(Arc::new(broken), Arc::new(AutoConfirm(true)));
    let err = ops.load().await.expect_err("500 without detail");
    assert_eq!(err.kind, ErrorKind::Transport);
    assert_eq!(err.message, FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_seed_fixture_skips_root_alias_record() {
    let app = helpers::TestApp::from_fixture().await;
    let tree = app.ops.load().await.expect("load");

    assert_eq!(tree.folder_count(), 7);
    assert!(!tree.contains(&FolderId::root_alias()));
    assert_eq!(
        tree.path_to(&FolderId::from("folder_api")),
        Some(vec![
            "Projects".to_string(),
            "CRM Enhancement".to_string(),
            "api design".to_string(),
        ])
    );
}
