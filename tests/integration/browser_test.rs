//! Integration tests for interactive folder views.

mod helpers;

use folio::core::config::browser::BrowserConfig;
use folio::entity::leaf::LeafItem;
use folio::service::{CommitTrigger, EditMode, RowKind};
use folio::{FolderId, FolderScope};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_inline_create_then_rename() {
    let app = helpers::TestApp::new();
    let mut browser = app.browser(BrowserConfig::default()).await;
    let proj = FolderId::from("proj");

    let tree = browser.tree().clone();
    browser
        .editor_mut()
        .start_add_child(&tree, Some(&proj))
        .expect("start add");
    browser.editor_mut().update_text(" Sprint 1 ");
    browser.commit(CommitTrigger::Confirm).await.expect("create");

    let created = browser
        .tree()
        .find_by_id(&proj)
        .and_then(|folder| folder.subfolders().last())
        .map(|folder| folder.id.clone())
        .expect("new child");
    assert_eq!(
        browser.tree().path_to(&created),
        Some(vec!["Projects".to_string(), "Sprint 1".to_string()])
    );

    let tree = browser.tree().clone();
    browser
        .editor_mut()
        .start_rename(&tree, &created)
        .expect("start rename");
    browser.editor_mut().update_text("Sprint One");
    browser.commit(CommitTrigger::FocusLoss).await.expect("rename");

    assert_eq!(
        browser.tree().path_to(&created),
        Some(vec!["Projects".to_string(), "Sprint One".to_string()])
    );
    assert_eq!(browser.editor().mode(), &EditMode::Idle);
    assert_eq!(app.repo.calls().create, 1);
    assert_eq!(app.repo.calls().rename, 1);
}

#[tokio::test]
async fn test_blank_commit_makes_no_call() {
    let app = helpers::TestApp::new();
    let mut browser = app.browser(BrowserConfig::default()).await;

    let tree = browser.tree().clone();
    browser
        .editor_mut()
        .start_add_child(&tree, None)
        .expect("start add");
    browser.editor_mut().update_text("   ");
    browser.commit(CommitTrigger::FocusLoss).await.expect("discarded");

    assert_eq!(app.repo.calls().writes(), 0);
    assert_eq!(browser.notice(), None);
}

#[tokio::test]
async fn test_views_keep_independent_snapshots() {
    let app = helpers::TestApp::new();
    let mut first = app.browser(BrowserConfig::default()).await;
    let mut second = app.browser(BrowserConfig::default()).await;

    let scope = first.delete(&FolderId::from("phoenix")).await.expect("delete");
    assert!(scope.is_some());
    assert!(second.tree().contains(&FolderId::from("phoenix")));

    second.refresh().await.expect("refresh");
    assert!(!second.tree().contains(&FolderId::from("phoenix")));
    assert_eq!(first.tree(), second.tree());
}

#[tokio::test]
async fn test_refresh_drops_vanished_selection() {
    let app = helpers::TestApp::new();
    let mut first = app.browser(BrowserConfig::default()).await;
    let mut second = app.browser(BrowserConfig::default()).await;

    second.select(&FolderId::from("phoenix"));
    first.delete(&FolderId::from("phoenix")).await.expect("delete");
    second.refresh().await.expect("refresh");

    assert_eq!(second.editor().selected(), Some(&FolderId::root_alias()));
    assert_eq!(second.scope(), FolderScope::All);
}

#[tokio::test]
async fn test_deleting_selected_branch_reports_new_scope() {
    let app = helpers::TestApp::new();
    let mut browser = app.browser(BrowserConfig::default()).await;
    let phoenix = FolderId::from("phoenix");
    let filtered = browser.select(&phoenix);
    assert!(filtered.contains(&phoenix));
    assert!(!filtered.contains(&FolderId::from("meet")));

    let scope = browser
        .delete(&FolderId::from("proj"))
        .await
        .expect("delete")
        .expect("confirmed");

    assert_eq!(scope, FolderScope::All);
    assert!(scope.contains(&FolderId::from("meet")));
    assert_eq!(browser.scope(), scope);
    assert_eq!(browser.editor().selected(), Some(&FolderId::root_alias()));
}

#[tokio::test]
async fn test_inline_add_row_follows_its_parent() {
    let app = helpers::TestApp::new();
    let mut browser = app.browser(BrowserConfig::default()).await;
    browser.toggle_expand(&FolderId::root_alias());

    let scope = browser
        .start_add_child(Some(&FolderId::from("proj")))
        .expect("start add");
    assert!(scope.is_some_and(|scope| scope.contains(&FolderId::from("phoenix"))));

    let kinds: Vec<(RowKind, String)> = browser
        .rows()
        .into_iter()
        .map(|row| (row.kind, row.label))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (RowKind::RootAlias, "All".to_string()),
            (RowKind::Folder, "Projects".to_string()),
            (RowKind::NewFolder, "New Folder".to_string()),
            (RowKind::Folder, "Phoenix".to_string()),
            (RowKind::Folder, "Meetings".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_rejected_delete_sets_notice() {
    let app = helpers::TestApp::new();
    let mut browser = app.browser(BrowserConfig::default()).await;
    let before = browser.tree().clone();

    let err = browser
        .delete(&FolderId::from("meet"))
        .await
        .expect_err("branch holds items");

    assert_eq!(browser.notice(), Some(err.message.as_str()));
    assert_eq!(browser.take_notice(), Some(err.message.clone()));
    assert_eq!(browser.notice(), None);
    assert_eq!(browser.tree(), &before);
    assert!(!browser.editor().is_pending(&FolderId::from("meet")));
}

#[tokio::test]
async fn test_declined_delete_keeps_folder() {
    let app = helpers::TestApp::with_records(helpers::sample_records(), false);
    let mut browser = app.browser(BrowserConfig::default()).await;

    let scope = browser.delete(&FolderId::from("phoenix")).await.expect("declined");
    assert_eq!(scope, None);
    assert!(browser.tree().contains(&FolderId::from("phoenix")));
    assert_eq!(app.repo.calls().delete, 0);
}

#[tokio::test]
async fn test_rows_show_files_under_folders() {
    let app = helpers::TestApp::new();
    let config = BrowserConfig {
        show_files: true,
        ..BrowserConfig::default()
    };
    let mut browser = app.browser(config).await;
    for item in [
        LeafItem::new("t1", "Weekly sync", "meet"),
        LeafItem::new("t2", "Retro", "meet"),
    ] {
        app.repo.file_item(item).await.expect("file item");
    }
    browser.set_items(app.repo.items().await);

    assert!(browser.toggle_expand(&FolderId::root_alias()));
    assert!(browser.toggle_expand(&FolderId::from("meet")));

    let leaves: Vec<(usize, String)> = browser
        .rows()
        .into_iter()
        .filter(|row| row.kind == RowKind::Leaf)
        .map(|row| (row.depth, row.label))
        .collect();
    assert_eq!(
        leaves,
        vec![(2, "Weekly sync".to_string()), (2, "Retro".to_string())]
    );
}
