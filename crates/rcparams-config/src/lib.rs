//! # rcparams config
//!
//! Typed, validated runtime parameters for statistical visualization.
//!
//! The bundled template declares every parameter with its default value.
//! A user rc file, passed explicitly or named by `RCPARAMS_PATH`, overlays
//! those defaults. Values are validated against a static rule table on
//! every write, so a store never holds an invalid value.
//!
//! ```no_run
//! use rcparams_config::rc_params;
//!
//! let rc = rc_params()?;
//! rc.set("plot.backend", "bokeh")?;
//! assert_eq!(rc.get_str("plot.backend")?.as_deref(), Some("bokeh"));
//! rc.reset(Some("plot.backend"))?;
//! # Ok::<(), rcparams_common::RcError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod defaults;
pub mod global;
pub mod loader;
pub mod params;
pub mod parser;
pub mod schema;
pub mod store;
pub mod validator;

pub use context::RcContext;
pub use defaults::{bundled_defaults, DEFAULT_TEMPLATE};
pub use global::rc_params;
pub use loader::{RcLoader, RcSource, RC_PATH_ENV};
pub use params::ParamMap;
pub use schema::{lookup, ParamSpec, Rule, PARAM_TABLE};
pub use store::RcParams;
pub use validator::ParamValidator;

pub use rcparams_common::{RcError, RcValue, Result};
