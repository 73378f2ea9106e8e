//! Command-line interface definitions.
//!
//! Defines the CLI structure for the hotspots application using `clap`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::placement::DuplicatePolicy;

/// Place search results into page hotspots by vendor relationship tier
#[derive(Parser, Debug)]
#[command(name = "hotspots")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the hotspots CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place a result set into hotspots and print them
    Optimize(OptimizeArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `hotspots config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that take only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Threshold-crossing duplicate handling, as chosen on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// Reproduce historical placement, duplicate included
    Compatible,
    /// Authoritative, capacity-capped showcase copy
    Corrected,
}

impl From<PolicyArg> for DuplicatePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Compatible => Self::Compatible,
            PolicyArg::Corrected => Self::Corrected,
        }
    }
}

/// Arguments for the `optimize` subcommand.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    /// Path to a JSON result-set document.
    pub results: PathBuf,

    /// Path to the configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the duplicate policy from the configuration.
    #[arg(long)]
    pub policy: Option<PolicyArg>,

    /// Pin an asset id into the showcase ahead of relationship placement.
    /// Repeat to pin several, in order.
    #[arg(long = "pin", value_name = "ASSET_ID")]
    pub pins: Vec<String>,
}
