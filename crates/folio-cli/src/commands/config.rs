//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use folio_core::config::AppConfig;
use folio_core::config::remote::RemoteBackend;
use folio_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration and check the folder service is reachable
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            let repo = folio_remote::connect(&config.remote).await?;
            match repo.list_folders().await {
                Ok(folders) => {
                    output::print_success(&format!("Configuration '{}' is valid", config_path));
                    let backend = match config.remote.backend {
                        RemoteBackend::Http => config.remote.base_url.as_str(),
                        RemoteBackend::Memory => "in-process",
                    };
                    output::print_kv("Folder service", backend);
                    output::print_kv("Folders", &folders.len().to_string());
                    output::print_kv("Root alias", &config.browser.root_alias_name);
                    output::print_kv("Log level", &config.logging.level);
                }
                Err(e) => {
                    output::print_error(&format!("Folder service check failed: {}", e.message));
                    return Err(e);
                }
            }
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::internal(format!("Failed to create dir: {}", e)))?;
            }

            tokio::fs::write(out_path, default_config)
                .await
                .map_err(|e| AppError::internal(format!("Failed to write config: {}", e)))?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}
