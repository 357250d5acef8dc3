//! Argument definitions.
use clap::{Args, Parser, Subcommand, ValueEnum};
use numsleuth_core::{ExecutionStrategy, MissingFilePolicy};
use std::path::PathBuf;

/// NumSleuth - divisor-label resolver and parallel max-digit-run aggregator
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level for the stderr subscriber.
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve each query to the label of its largest mapped divisor
    Divisors(DivisorsArgs),
    /// Sum the largest digit run of each input file
    MaxSum(MaxSumArgs),
}

#[derive(Debug, Args)]
pub struct DivisorsArgs {
    /// First query (inclusive)
    #[arg(long)]
    pub start: Option<u64>,

    /// Last query (inclusive)
    #[arg(long)]
    pub end: Option<u64>,

    /// Factor mapping entry; repeat to add more. Replaces the configured mapping.
    #[arg(short, long = "map", value_name = "FACTOR=LABEL")]
    pub map: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct MaxSumArgs {
    /// Input files; falls back to `aggregator.paths` from the config file
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Execution strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// What a missing file contributes to the sum
    #[arg(short, long, value_enum)]
    pub missing: Option<PolicyArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// One dedicated worker thread per file
    Threads,
    /// Fixed-size thread pool, one task per file
    Pool,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Threads => ExecutionStrategy::Threads,
            StrategyArg::Pool => ExecutionStrategy::Pool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Each missing file subtracts 1
    Sentinel,
    /// Missing files add nothing
    Zero,
    /// Any missing file is an error
    Abort,
}

impl From<PolicyArg> for MissingFilePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Sentinel => MissingFilePolicy::Sentinel,
            PolicyArg::Zero => MissingFilePolicy::Zero,
            PolicyArg::Abort => MissingFilePolicy::Abort,
        }
    }
}
