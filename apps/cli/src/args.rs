use std::path::PathBuf;

use clap::Parser;

/// Serves mock cost-insights data to a local dashboard.
#[derive(Debug, Default, Parser)]
#[command(name = "cost-insights-demo", version)]
pub struct CliArgs {
    /// Override the configured port for this run only
    #[arg(long)]
    pub port: Option<u16>,

    /// Seed the cost generator so every run serves the same series
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
