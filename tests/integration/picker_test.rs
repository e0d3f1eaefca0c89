//! Integration tests for destination picking and item scoping.

mod helpers;

use folio::core::config::browser::BrowserConfig;
use folio::entity::leaf::LeafItem;
use folio::{DestinationPicker, DestinationResolver, FolderId, FolderScope};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_suggestion_preselects_nested_folder_ignoring_case() {
    let app = helpers::TestApp::from_fixture().await;
    let tree = app.ops.load().await.expect("load");

    assert_eq!(
        DestinationResolver::resolve(&tree, &["CRM", "API Design"]),
        Some(FolderId::from("folder_api"))
    );

    let picker = DestinationPicker::new(tree, BrowserConfig::default(), &["CRM", "API Design"]);
    let (id, path) = picker.confirm().expect("preselected");
    assert_eq!(id, FolderId::from("folder_api"));
    assert_eq!(path.join(" / "), "Projects / CRM Enhancement / api design");
}

#[tokio::test]
async fn test_unmatched_suggestion_requires_manual_choice() {
    let app = helpers::TestApp::from_fixture().await;
    let tree = app.ops.load().await.expect("load");

    let mut picker = DestinationPicker::new(tree, BrowserConfig::default(), &["Finance", "Q3"]);
    assert_eq!(picker.selected(), None);
    assert_eq!(picker.confirm(), None);

    assert!(picker.select(&FolderId::from("folder_standups")));
    let (_, path) = picker.confirm().expect("manual choice");
    assert_eq!(path, vec!["Meetings".to_string(), "Standups".to_string()]);
}

#[tokio::test]
async fn test_root_alias_record_is_never_suggested() {
    let app = helpers::TestApp::from_fixture().await;
    let tree = app.ops.load().await.expect("load");
    assert_eq!(
        DestinationResolver::resolve(&tree, &["All Transcriptions"]),
        None
    );
}

#[tokio::test]
async fn test_selection_scopes_items_to_branch() {
    let app = helpers::TestApp::from_fixture().await;
    let mut browser = app.browser(BrowserConfig::default()).await;
    let items = vec![
        LeafItem::new("t1", "Kickoff", "folder_projects"),
        LeafItem::new("t2", "Endpoints", "folder_api"),
        LeafItem::new("t3", "Monday", "folder_standups"),
    ];

    let scope = browser.select(&FolderId::from("folder_crm"));
    let names: Vec<&str> = scope.filter(&items).map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Endpoints"]);

    let scope = browser.select(&FolderId::root_alias());
    assert_eq!(scope, FolderScope::All);
    assert_eq!(scope.filter(&items).count(), 3);
}
