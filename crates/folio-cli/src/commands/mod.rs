//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;

use std::sync::Arc;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use tokio::task;

use crate::output::OutputFormat;
use folio_core::config::AppConfig;
use folio_core::error::AppError;
use folio_core::traits::{AutoConfirm, Confirmation};
use folio_service::FolderOperations;

/// Browse and organize document repository folders
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder management
    Folder(folder::FolderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, config, self.format).await,
            Commands::Config(args) => {
                config::execute(args, config, &self.config, self.format).await
            }
        }
    }
}

/// Helper: load configuration from file and environment
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: connect to the configured folder authority
pub async fn create_operations(
    config: &AppConfig,
    assume_yes: bool,
) -> Result<FolderOperations, AppError> {
    let repo = folio_remote::connect(&config.remote).await?;
    let confirmation: Arc<dyn Confirmation> = if assume_yes {
        Arc::new(AutoConfirm(true))
    } else {
        Arc::new(PromptConfirmation)
    };
    Ok(FolderOperations::new(repo, confirmation))
}

/// Asks on the terminal before deleting.
#[derive(Debug, Clone, Copy)]
pub struct PromptConfirmation;

#[async_trait]
impl Confirmation for PromptConfirmation {
    async fn confirm_delete(&self, name: &str) -> bool {
        let prompt = format!("Delete folder '{name}' and all of its subfolders?");
        let answer = task::spawn_blocking(move || {
            dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
        })
        .await;

        match answer {
            Ok(Ok(confirmed)) => confirmed,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Confirmation prompt failed");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt task failed");
                false
            }
        }
    }
}
