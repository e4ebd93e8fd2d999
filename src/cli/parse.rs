//! CLI parse: clap types for sltable. No behavior; definitions only.

use crate::types::{ColumnName, EntityKind, RenderMode, SortKey};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sltable - column selection, sorting and rendering for resource listings
#[derive(Parser, Debug)]
#[command(name = "sltable")]
#[command(about = "Select, sort and render resource listings as tables or JSON")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (replaces the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records of one entity kind
    List {
        /// Entity kind (volume, snapshot, access-host, subnet, hardware, user,
        /// virtual-server, host-guest)
        kind: EntityKind,
        /// JSON array of records to list; "-" reads stdin
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        projection: ProjectionArgs,
        /// Output format (table or json); defaults to output.default_mode
        #[arg(long)]
        output: Option<RenderMode>,
    },
    /// Describe the registered columns of an entity kind
    Columns {
        kind: EntityKind,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the field mask a listing would request, without fetching
    Mask {
        kind: EntityKind,
        #[command(flatten)]
        projection: ProjectionArgs,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Column and sort selection shared by `list` and `mask`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ProjectionArgs {
    /// Column to sort by; an empty value disables sorting
    #[arg(long)]
    pub sortby: Option<String>,

    /// Columns to display, repeated or comma-separated
    #[arg(long = "column", value_delimiter = ',')]
    pub columns: Vec<String>,
}

impl ProjectionArgs {
    /// `None` when `--sortby` was not given.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sortby.as_deref().map(SortKey::from)
    }

    pub fn column_names(&self) -> Vec<ColumnName> {
        self.columns
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(ColumnName::new)
            .collect()
    }
}
