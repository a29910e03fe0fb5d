//! Command implementations.

use crate::cli::{Cli, Command};
use crate::error::CliResult;
use rcparams_config::{RcLoader, RcParams, DEFAULT_TEMPLATE};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Runs the parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> CliResult<()> {
    debug!(command = ?cli.command, "running command");
    match &cli.command {
        Command::Template => {
            out.write_all(DEFAULT_TEMPLATE.as_bytes())?;
            Ok(())
        }
        Command::Check { file } => check(file, out),
        Command::Show { json, pattern } => {
            let rc = RcParams::load(cli.rc_file.as_deref())?;
            show(&rc, *json, pattern.as_deref(), out)
        }
        Command::Get { key } => {
            let rc = RcParams::load(cli.rc_file.as_deref())?;
            writeln!(out, "{}", rc.get(key)?)?;
            Ok(())
        }
        Command::Describe { key } => {
            let rc = RcParams::load(cli.rc_file.as_deref())?;
            describe(&rc, key, out)
        }
    }
}

fn show(rc: &RcParams, json: bool, pattern: Option<&str>, out: &mut impl Write) -> CliResult<()> {
    let pairs = rc.find_all(pattern.unwrap_or(""))?;

    if json {
        let object = pairs
            .into_iter()
            .map(|(key, value)| serde_json::to_value(value).map(|v| (key, v)))
            .collect::<Result<serde_json::Map<String, serde_json::Value>, _>>()?;
        serde_json::to_writer_pretty(&mut *out, &object)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in pairs {
        writeln!(out, "{key:<width$} : {value}")?;
    }
    Ok(())
}

fn check(file: &Path, out: &mut impl Write) -> CliResult<()> {
    let overrides = RcLoader::read_overrides(file)?;
    // Runs the same overlay a real load does.
    let merged = RcLoader::load_file(file)?;
    info!(path = %file.display(), keys = overrides.len(), "rc file is valid");

    writeln!(out, "{}: ok ({} of {} keys set)", file.display(), overrides.len(), merged.len())?;
    let rc = RcParams::new()?;
    for (key, value) in merged.diff(rc.defaults()) {
        writeln!(out, "  {key} : {value} (default {})", rc.default_value(key)?)?;
    }
    Ok(())
}

fn describe(rc: &RcParams, key: &str, out: &mut impl Write) -> CliResult<()> {
    let spec = rc.describe(key)?;
    writeln!(out, "{}", spec.key)?;
    writeln!(out, "  {}", spec.doc)?;
    writeln!(out, "  group:   {}", spec.group())?;
    writeln!(out, "  rule:    {}", spec.rule.describe())?;
    writeln!(out, "  default: {}", rc.default_value(key)?)?;
    writeln!(out, "  current: {}", rc.get(key)?)?;
    Ok(())
}
