//! Main entry point for the rcparams command line tool.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rcparams_cli::{run, Cli};
use rcparams_common::logging;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_with_level(&cli.log_level)
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    debug!(rc_file = ?cli.rc_file, "starting rcparams");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out).context("rcparams command failed")?;

    Ok(())
}
