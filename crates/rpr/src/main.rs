// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! rpr - boot the RecipePress orchestration core outside of its host.
//!
//! This is the binary entry point. It loads the layered configuration,
//! boots the plugin runtime against an in-memory host and reports what was
//! registered.

mod boot;
mod modules;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rpr_config::RprConfig;

/// rpr - RecipePress orchestration core.
#[derive(Parser, Debug)]
#[command(name = "rpr", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Boot the plugin and print the delivered hook registrations.
    Boot {
        /// Output structured JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// List compiled-in modules.
    Modules {
        /// Only show modules whose name or description matches.
        query: Option<String>,
    },
    /// Print the resolved configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => rpr_config::load_and_validate_path(path),
        None => rpr_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            rpr_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.plugin.log_level);
    tracing::debug!(plugin = %config.plugin.name, "configuration loaded");

    let result = match cli.command {
        Some(Commands::Boot { json, plain }) => boot::run_boot(config, json, plain),
        Some(Commands::Modules { query }) => {
            modules::run_modules(&config, query.as_deref());
            Ok(())
        }
        Some(Commands::Config) => print_config(&config),
        None => {
            println!("rpr: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("rpr: {e}");
        std::process::exit(1);
    }
}

fn print_config(config: &RprConfig) -> Result<(), rpr_core::RprError> {
    let out = toml::to_string_pretty(config)
        .map_err(|e| rpr_core::RprError::Config(format!("failed to render configuration: {e}")))?;
    print!("{out}");
    Ok(())
}

/// Logs go to stderr so `--json` output stays machine readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rpr={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = rpr_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.plugin.name, "recipepress-reloaded");
    }

    #[test]
    fn default_config_renders_as_toml() {
        let rendered = toml::to_string_pretty(&RprConfig::default()).unwrap();
        assert!(rendered.contains("[plugin]"));
        assert!(rendered.contains("\"Demo\""));
    }
}
