//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ProjectionArgs};
pub use presentation::{format_columns_json, format_columns_text, format_mask};
pub use route::RunContext;
