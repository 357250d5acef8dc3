//! NumSleuth — divisor-label resolver and parallel max-digit-run aggregator.
//!
//! Thin binary entry point. All logic lives in the `numsleuth-core`
//! and `numsleuth-cli` crates.

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = numsleuth_cli::Cli::parse();

    // Initialise structured logging on stderr; stdout carries results only.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("NumSleuth starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    numsleuth_cli::run(&cli, &mut out)
}
