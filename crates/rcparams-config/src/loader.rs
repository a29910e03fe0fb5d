//! Template loading: source resolution and overlaying user files on defaults.

use crate::defaults::bundled_defaults;
use crate::params::ParamMap;
use crate::parser::{parse_template, RawEntry};
use crate::schema::lookup;
use rcparams_common::{RcError, RcValue, Result};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming a user rc file.
pub const RC_PATH_ENV: &str = "RCPARAMS_PATH";

/// Where a parameter set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcSource {
    /// The template shipped with the library.
    Bundled,
    /// A file passed explicitly by the caller.
    File(PathBuf),
    /// A file named by [`RC_PATH_ENV`].
    Env(PathBuf),
}

impl RcSource {
    /// Resolves the source to load.
    ///
    /// An explicit path wins, then the environment variable, then the
    /// bundled template. An empty environment variable counts as unset.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }
        match env::var_os(RC_PATH_ENV) {
            Some(value) if !value.is_empty() => Self::Env(PathBuf::from(value)),
            Some(_) => {
                warn!("{RC_PATH_ENV} is set but empty, using bundled defaults");
                Self::Bundled
            }
            None => Self::Bundled,
        }
    }

    /// Path of the file to read, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Bundled => None,
            Self::File(path) | Self::Env(path) => Some(path),
        }
    }
}

impl fmt::Display for RcSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Env(path) => write!(f, "{} (from {RC_PATH_ENV})", path.display()),
        }
    }
}

/// Loads complete parameter sets.
pub struct RcLoader;

impl RcLoader {
    /// Loads parameters from the resolved source.
    pub fn load(explicit: Option<&Path>) -> Result<(RcSource, ParamMap)> {
        let source = RcSource::resolve(explicit);
        let params = Self::load_source(&source)?;
        Ok((source, params))
    }

    /// Loads parameters from a given source.
    pub fn load_source(source: &RcSource) -> Result<ParamMap> {
        match source.path() {
            None => Ok(bundled_defaults()?.clone()),
            Some(path) => Self::load_file(path),
        }
    }

    /// Reads a user rc file and overlays it on the bundled defaults.
    pub fn load_file(path: &Path) -> Result<ParamMap> {
        let text = std::fs::read_to_string(path).map_err(|e| RcError::io(path, e))?;
        let params = Self::load_str(&text, &path.display().to_string())?;
        info!(path = %path.display(), "loaded rc file");
        Ok(params)
    }

    /// Parses rc text and overlays it on the bundled defaults.
    ///
    /// Keys the text does not mention keep their default values.
    pub fn load_str(text: &str, source_name: &str) -> Result<ParamMap> {
        let entries = parse_template(text, source_name)?;
        let mut params = bundled_defaults()?.clone();
        overlay(&mut params, &entries, source_name)?;
        Ok(params)
    }

    /// Reads only the keys an rc file sets, validated, in file order.
    pub fn read_overrides(path: &Path) -> Result<ParamMap> {
        let text = std::fs::read_to_string(path).map_err(|e| RcError::io(path, e))?;
        Self::overrides_from_str(&text, &path.display().to_string())
    }

    /// Parses rc text into the validated keys it sets, without defaults.
    pub fn overrides_from_str(text: &str, source_name: &str) -> Result<ParamMap> {
        let entries = parse_template(text, source_name)?;
        let mut params = ParamMap::new();
        overlay(&mut params, &entries, source_name)?;
        Ok(params)
    }
}

/// Validates `entries` and writes them into `params`.
///
/// Stops at the first undeclared key or invalid value; `params` may then be
/// partially updated, so callers overlay onto a copy.
pub(crate) fn overlay(params: &mut ParamMap, entries: &[RawEntry], source_name: &str) -> Result<()> {
    for entry in entries {
        let spec = lookup(&entry.key).ok_or_else(|| RcError::unknown_key(&entry.key))?;
        let value = spec
            .rule
            .validate(spec.key, RcValue::from_literal(&entry.value))
            .map_err(|e| match e {
                RcError::Validation { key, message } => RcError::validation(
                    key,
                    format!("{message} ({source_name} line {})", entry.line),
                ),
                other => other,
            })?;
        debug!(key = spec.key, %value, source = source_name, "set from template");
        params.insert(spec.key, value);
    }
    Ok(())
}
