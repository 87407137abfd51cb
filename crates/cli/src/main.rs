//! Collector Sizing Planner CLI
//!
//! A command-line tool for sizing monitoring collector deployments:
//! score device inventories, allocate collector sizes and counts, and
//! render per-site and deployment-wide plans.

mod commands;
mod config;
mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sizer_lib::CollectorSize;

/// Collector Sizing Planner CLI
#[derive(Parser)]
#[command(name = "csp")]
#[command(author, version, about = "CLI for the Collector Sizing Planner", long_about = None)]
pub struct Cli {
    /// Path to a sizing config file (can also be set via CSP_CONFIG env var)
    #[arg(long, env = "CSP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, global = true, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a full deployment plan from a sites file
    Plan {
        /// Path to the sites file (JSON)
        sites: PathBuf,

        /// Override the maximum load percentage, in (0, 100]
        #[arg(long)]
        max_load: Option<u8>,

        /// Add one N+1 standby collector per site for polling
        #[arg(long)]
        polling_failover: bool,

        /// Add one N+1 standby collector per site for each logs class
        #[arg(long)]
        logs_failover: bool,

        /// Pin the polling collector size instead of optimizing
        #[arg(long)]
        size: Option<CollectorSize>,
    },

    /// Show weighted polling scores with per-device breakdowns
    Score {
        /// Path to the sites file (JSON)
        sites: PathBuf,
    },

    /// Show the active collector capacity table
    Sizes,

    /// Write a starter sites file
    Init {
        /// Where to write the file
        path: PathBuf,

        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let sizing_config = config::load_sizing_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Plan {
            sites,
            max_load,
            polling_failover,
            logs_failover,
            size,
        } => {
            let overrides = commands::plan::PlanOverrides {
                max_load,
                polling_failover,
                logs_failover,
                pinned_size: size,
            };
            commands::plan::run(&sites, sizing_config, overrides, cli.format)?;
        }
        Commands::Score { sites } => {
            commands::score::run(&sites, &sizing_config, cli.format)?;
        }
        Commands::Sizes => {
            commands::sizes::run(&sizing_config, cli.format)?;
        }
        Commands::Init { path, force } => {
            commands::init::run(&path, force)?;
        }
    }

    Ok(())
}
