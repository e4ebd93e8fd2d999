//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log fields (e.g. "list.volume", "config").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::List { kind, .. } => format!("list.{}", kind),
        Commands::Columns { kind, .. } => format!("columns.{}", kind),
        Commands::Mask { kind, .. } => format!("mask.{}", kind),
        Commands::Config => "config".to_string(),
    }
}
