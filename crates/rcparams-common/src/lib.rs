//! # rcparams common
//!
//! Shared value type, error type and logging setup for the rcparams
//! workspace.
//!
//! This crate provides the foundational types used by the parameter store
//! and the command line tool.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use types::*;
