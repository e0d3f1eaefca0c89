//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use folio_core::config::AppConfig;
use folio_core::error::AppError;
use folio_core::types::FolderId;
use folio_entity::folder::FolderTree;
use folio_service::{DeleteOutcome, DestinationPicker, FolderBrowser, FolderScope, TreeEditor};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List every folder with its path
    List,
    /// Show the folder tree
    Tree,
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent_id: Option<String>,
    },
    /// Rename a folder
    Rename {
        /// Folder ID
        id: String,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder and its subfolders
    Delete {
        /// Folder ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List the folder IDs within a folder's branch
    Scope {
        /// Folder ID (the root alias means no filter)
        id: String,
    },
    /// Suggest a destination folder from a path of names
    Suggest {
        /// Suggested path, outermost name first
        #[arg(required = true)]
        path: Vec<String>,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Path
    path: String,
    /// Items
    count: u64,
    /// Whether delete is offered
    deletable: bool,
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let assume_yes = matches!(args.command, FolderCommand::Delete { yes: true, .. });
    let ops = super::create_operations(config, assume_yes).await?;

    match &args.command {
        FolderCommand::List => {
            let tree = ops.load().await?;
            let editor = TreeEditor::new(config.browser.clone(), false);
            let rows: Vec<FolderRow> = tree
                .folders()
                .map(|folder| FolderRow {
                    id: folder.id.to_string(),
                    name: folder.name.clone(),
                    path: tree
                        .path_to(&folder.id)
                        .map(|path| path.join(" / "))
                        .unwrap_or_default(),
                    count: folder.count,
                    deletable: editor.can_delete(&tree, &folder.id),
                })
                .collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Tree => {
            let mut browser = FolderBrowser::new(ops, config.browser.clone(), true);
            browser.mount().await?;
            match format {
                OutputFormat::Json => output::print_json(browser.tree()),
                OutputFormat::Table => {
                    expand_all(&mut browser);
                    output::print_outline(&browser.rows());
                }
            }
        }
        FolderCommand::Create { name, parent_id } => {
            let tree = ops.load().await?;
            let parent = parent_id.as_deref().map(FolderId::from);
            let outcome = ops.create(&tree, parent.as_ref(), name).await?;
            let path = outcome
                .tree
                .path_to(&outcome.folder_id)
                .map(|path| path.join(" / "))
                .unwrap_or_else(|| name.trim().to_string());
            output::print_success(&format!(
                "Folder '{}' created (id: {})",
                path, outcome.folder_id
            ));
        }
        FolderCommand::Rename { id, name } => {
            let id = FolderId::from(id.as_str());
            let tree = ops.load().await?;
            let old_name = folder_name(&tree, &id)?;
            let next = ops.rename(&tree, &id, name, &old_name).await?;
            if next == tree {
                output::print_warning(&format!("Folder '{}' already has that name", old_name));
            } else {
                output::print_success(&format!(
                    "Folder '{}' renamed to '{}'",
                    old_name,
                    name.trim()
                ));
            }
        }
        FolderCommand::Delete { id, .. } => {
            let id = FolderId::from(id.as_str());
            let tree = ops.load().await?;
            let name = folder_name(&tree, &id)?;

            let editor = TreeEditor::new(config.browser.clone(), false);
            if !editor.can_delete(&tree, &id) {
                output::print_warning(&format!(
                    "Folder '{}' is not empty; the folder service will likely refuse",
                    name
                ));
            }

            match ops.delete(&tree, &id, &name, None).await? {
                DeleteOutcome::Declined => println!("Cancelled."),
                DeleteOutcome::Deleted { .. } => {
                    output::print_success(&format!("Folder '{}' deleted", name));
                }
            }
        }
        FolderCommand::Scope { id } => {
            let tree = ops.load().await?;
            let id = FolderId::from(id.as_str());
            match FolderScope::for_selection(&tree, Some(&id)) {
                FolderScope::All => {
                    output::print_success("No folder filter: every item is in scope")
                }
                FolderScope::Folders(ids) => {
                    let mut ids: Vec<String> = ids.into_iter().map(FolderId::into_inner).collect();
                    ids.sort();
                    match format {
                        OutputFormat::Json => output::print_json(&ids),
                        OutputFormat::Table if ids.is_empty() => {
                            output::print_warning(&format!("Folder '{}' not found", id));
                        }
                        OutputFormat::Table => ids.iter().for_each(|id| println!("{}", id)),
                    }
                }
            }
        }
        FolderCommand::Suggest { path } => {
            let tree = ops.load().await?;
            let picker = DestinationPicker::new(tree, config.browser.clone(), path.as_slice());
            match picker.confirm() {
                Some((id, path)) => match format {
                    OutputFormat::Json => output::print_json(&serde_json::json!({
                        "id": id,
                        "path": path,
                    })),
                    OutputFormat::Table => {
                        let suggested = path.join(" / ");
                        output::print_success(&format!("Suggested: {} ({})", suggested, id));
                        output::print_outline(&picker.rows());
                    }
                },
                None => output::print_warning("No matching folder; choose a destination manually"),
            }
        }
    }

    Ok(())
}

fn folder_name(tree: &FolderTree, id: &FolderId) -> Result<String, AppError> {
    tree.find_by_id(id)
        .map(|folder| folder.name.clone())
        .ok_or_else(|| AppError::not_found(format!("Folder '{}' not found", id)))
}

fn expand_all(browser: &mut FolderBrowser) {
    let tree = browser.tree().clone();
    let editor = browser.editor_mut();
    if !editor.is_expanded(&FolderId::root_alias()) {
        editor.toggle_expand(&tree, &FolderId::root_alias());
    }
    for folder in tree.folders() {
        if !editor.is_expanded(&folder.id) {
            editor.toggle_expand(&tree, &folder.id);
        }
    }
}
