//! Command routing logic for CLI

use scout_core::{FileScanStorage, ScoutConfig};

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub async fn route(cli: Cli, config: ScoutConfig) -> anyhow::Result<()> {
    let storage_dir = config.storage.resolved_dir();
    tracing::debug!("Using scan storage at {}", storage_dir.display());
    let storage = FileScanStorage::new(storage_dir);

    match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, &config, storage, cli.verbose).await,
        Commands::Show { id, json } => commands::show::execute(&storage, &id, json).await,
        Commands::List => commands::list::execute(&storage, cli.verbose).await,
        Commands::Delete { id } => commands::delete::execute(&storage, &id).await,
    }
}
