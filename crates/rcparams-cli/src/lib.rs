//! # rcparams CLI
//!
//! Inspect, query and check rc files from the command line.
//!
//! The binary parses arguments and sets up logging; everything else lives
//! here so it can be driven from tests with an in-memory writer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::*;
pub use commands::*;
pub use error::*;
