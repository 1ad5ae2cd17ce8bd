mod args;
mod output;

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use mailsift_lib::Validator;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use args::{Cli, Commands};
use output::OutputRow;

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let options = cli.options()?;
    let validator = Validator::new().with_tables(cli.tables()?);

    let mut addresses = Vec::new();
    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            let address = line.trim();
            if !address.is_empty() {
                addresses.push(address.to_string());
            }
        }
    } else if let Some(Commands::Validate { email }) = &cli.cmd {
        addresses.push(email.clone());
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    }

    info!(count = addresses.len(), mx = options.enable_mx_check, "validating");
    let rows: Vec<OutputRow> = addresses
        .iter()
        .map(|address| OutputRow::new(address, validator.validate(address, &options)))
        .collect();

    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalides, 1 fatal
    if output::any_invalid(&rows) {
        std::process::exit(2);
    }
    Ok(())
}

/// Logs go to stderr so reports on stdout stay machine-readable.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}
