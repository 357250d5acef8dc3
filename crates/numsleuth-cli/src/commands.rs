//! Subcommand execution: merge CLI flags over the config file, call into
//! the core crate, render the result.
use crate::cli::{Cli, Commands, DivisorsArgs, MaxSumArgs};
use crate::output;
use anyhow::{bail, Context, Result};
use numsleuth_core::{
    aggregate_files, solve, Config, ExecutionStrategy, Mapping, MissingFilePolicy, QueryRange,
};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Run the parsed command line, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match &cli.command {
        Commands::Divisors(args) => run_divisors(args, &config, out),
        Commands::MaxSum(args) => run_max_sum(args, &config, out),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path).context("loading configuration"),
        None => Ok(Config::default()),
    }
}

fn run_divisors<W: Write>(args: &DivisorsArgs, config: &Config, out: &mut W) -> Result<()> {
    let start = args.start.unwrap_or(config.divisors.start);
    let end = args.end.unwrap_or(config.divisors.end);
    let range = QueryRange::new(start, end)?;

    let mapping = if args.map.is_empty() {
        config.divisors.mapping.clone()
    } else {
        Mapping::from_entries(&args.map)?
    };

    info!(
        "Resolving {} queries against {} mapped factor(s)",
        range.query_count(),
        mapping.len()
    );
    let labels = solve(range, &mapping);
    output::write_labels(out, &labels, args.format)
}

fn run_max_sum<W: Write>(args: &MaxSumArgs, config: &Config, out: &mut W) -> Result<()> {
    let paths = if args.paths.is_empty() {
        config.aggregator.paths.clone()
    } else {
        args.paths.clone()
    };
    if paths.is_empty() {
        bail!("no input files: pass PATH arguments or set aggregator.paths in the config file");
    }

    let strategy: ExecutionStrategy = args
        .strategy
        .map(Into::into)
        .unwrap_or(config.aggregator.strategy);
    let policy: MissingFilePolicy = args
        .missing
        .map(Into::into)
        .unwrap_or(config.aggregator.missing);
    debug!(
        "Aggregating {} file(s): {} ({policy} policy)",
        paths.len(),
        strategy.description()
    );

    let report = aggregate_files(&paths, strategy, policy)?;
    output::write_aggregate(out, &report, args.format)
}
