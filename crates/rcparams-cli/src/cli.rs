//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and check runtime parameter files
#[derive(Parser, Debug)]
#[command(name = "rcparams", author, version, about, long_about = None)]
pub struct Cli {
    /// rc file to load instead of RCPARAMS_PATH or the bundled defaults
    #[arg(short = 'f', long, global = true)]
    pub rc_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every parameter in template order
    Show {
        /// Print a JSON object instead of `key : value` lines
        #[arg(long)]
        json: bool,

        /// Only keys matching this regular expression
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Print the value of one parameter
    Get {
        /// Dotted parameter key, e.g. plot.backend
        key: String,
    },

    /// Validate an rc file and list what it changes
    Check {
        /// File to check
        file: PathBuf,
    },

    /// Print the bundled default template
    Template,

    /// Print the rule, default and current value of a parameter
    Describe {
        /// Dotted parameter key
        key: String,
    },
}
