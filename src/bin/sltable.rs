//! sltable CLI Binary
//!
//! Lists records from a JSON input as a table or JSON, with column selection
//! and sorting driven by the field registry.

use clap::Parser;
use sltable::cli::{map_error, Cli, RunContext};
use sltable::config::ConfigLoader;
use sltable::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let e = sltable::error::ApiError::from(e);
            eprintln!("{}", map_error(&e, true));
            process::exit(e.exit_code());
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("sltable starting");

    let context = match RunContext::from_config(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e, true));
            process::exit(e.exit_code());
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e, context.color()));
            process::exit(e.exit_code());
        }
    }
}

/// Apply CLI logging flags on top of the loaded `[logging]` section.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    if config.enabled && config.output == "file" && config.file.is_none() {
        if let Ok(path) = resolve_log_file_path(Some(&config)) {
            config.file = Some(path);
        }
    }

    config
}
