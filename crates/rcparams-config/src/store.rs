//! The runtime parameter store.
//!
//! Reads go through an [`ArcSwap`] and never block. Every mutation takes one
//! writer lock, builds a complete new [`ParamMap`], and publishes it with a
//! single pointer swap, so readers only ever see a fully validated set.

use crate::defaults::bundled_defaults;
use crate::loader::{RcLoader, RcSource};
use crate::params::ParamMap;
use crate::schema::{lookup, ParamSpec};
use crate::validator::ParamValidator;
use arc_swap::ArcSwap;
use parking_lot::{Mutex, MutexGuard};
use rcparams_common::{RcError, RcValue, Result};
use regex::Regex;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Validated, mutable set of runtime parameters.
pub struct RcParams {
    defaults: Arc<ParamMap>,
    current: ArcSwap<ParamMap>,
    write_lock: Mutex<()>,
}

impl RcParams {
    /// Creates a store holding the bundled defaults.
    pub fn new() -> Result<Self> {
        let defaults = bundled_defaults()?.clone();
        Ok(Self::from_params(defaults.clone(), defaults))
    }

    /// Creates a store from the resolved source: `source` if given, else the
    /// file named by `RCPARAMS_PATH`, else the bundled defaults.
    pub fn load(source: Option<&Path>) -> Result<Self> {
        let (resolved, params) = RcLoader::load(source)?;
        info!(source = %resolved, "rcParams loaded");
        Ok(Self::from_params(bundled_defaults()?.clone(), params))
    }

    fn from_params(defaults: ParamMap, current: ParamMap) -> Self {
        Self {
            defaults: Arc::new(defaults),
            current: ArcSwap::from_pointee(current),
            write_lock: Mutex::new(()),
        }
    }

    /// Re-initializes this store from a source, resolved as in [`Self::load`].
    ///
    /// The file is read and validated before the store is touched; on any
    /// error the current values stay in place.
    pub fn reload(&self, source: Option<&Path>) -> Result<RcSource> {
        let (resolved, params) = RcLoader::load(source)?;
        let _guard = self.write_lock.lock();
        self.current.store(Arc::new(params));
        info!(source = %resolved, "rcParams reloaded");
        Ok(resolved)
    }

    /// Returns the current value of `key`.
    pub fn get(&self, key: &str) -> Result<RcValue> {
        self.current
            .load()
            .get(key)
            .cloned()
            .ok_or_else(|| RcError::unknown_key(key))
    }

    /// Returns the current value of an integer parameter.
    pub fn get_int(&self, key: &str) -> Result<i64> {
        let value = self.get(key)?;
        value
            .as_int()
            .ok_or_else(|| RcError::validation(key, format!("{} is not an integer", value.type_name())))
    }

    /// Returns the current value of a numeric parameter.
    pub fn get_float(&self, key: &str) -> Result<f64> {
        let value = self.get(key)?;
        value
            .as_float()
            .ok_or_else(|| RcError::validation(key, format!("{} is not a number", value.type_name())))
    }

    /// Returns the current value of a string parameter; `None` for null.
    pub fn get_str(&self, key: &str) -> Result<Option<String>> {
        match self.get(key)? {
            RcValue::Str(s) => Ok(Some(s)),
            RcValue::None => Ok(None),
            other => Err(RcError::validation(
                key,
                format!("{} is not a string", other.type_name()),
            )),
        }
    }

    /// Validates and stores a value.
    ///
    /// On error nothing changes.
    pub fn set(&self, key: &str, value: impl Into<RcValue>) -> Result<()> {
        let value = ParamValidator::validate(key, value.into())?;
        let guard = self.write_lock.lock();
        self.publish(&guard, |params| {
            debug!(key, %value, "rcParam set");
            params.insert(key, value);
        });
        Ok(())
    }

    /// Validates every pair, then applies them all at once.
    ///
    /// One invalid pair rejects the whole batch.
    pub fn update<I, K, V>(&self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RcValue>,
    {
        let validated = pairs
            .into_iter()
            .map(|(key, value)| {
                let key = key.as_ref();
                ParamValidator::validate(key, value.into()).map(|v| (key.to_string(), v))
            })
            .collect::<Result<Vec<_>>>()?;

        let guard = self.write_lock.lock();
        self.publish(&guard, |params| {
            for (key, value) in validated {
                debug!(key = %key, %value, "rcParam updated");
                params.insert(key, value);
            }
        });
        Ok(())
    }

    /// Restores `key` to its default, or every key when `key` is `None`.
    pub fn reset(&self, key: Option<&str>) -> Result<()> {
        match key {
            Some(key) => {
                let default = self.default_value(key)?;
                let guard = self.write_lock.lock();
                self.publish(&guard, |params| {
                    debug!(key, %default, "rcParam reset");
                    params.insert(key, default);
                });
            }
            None => {
                let _guard = self.write_lock.lock();
                self.current.store(Arc::clone(&self.defaults));
                debug!("all rcParams reset");
            }
        }
        Ok(())
    }

    /// An immutable view of every current value.
    pub fn snapshot(&self) -> Arc<ParamMap> {
        self.current.load_full()
    }

    /// The defaults this store resets to.
    pub fn defaults(&self) -> &ParamMap {
        &self.defaults
    }

    /// The default value of `key`.
    pub fn default_value(&self, key: &str) -> Result<RcValue> {
        self.defaults
            .get(key)
            .cloned()
            .ok_or_else(|| RcError::unknown_key(key))
    }

    /// True when `key` currently holds its default value.
    pub fn is_default(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)? == self.default_value(key)?)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> Vec<String> {
        self.current.load().keys().map(str::to_string).collect()
    }

    /// All key/value pairs whose key matches the regular expression `pattern`.
    pub fn find_all(&self, pattern: &str) -> Result<Vec<(String, RcValue)>> {
        let re = Regex::new(pattern).map_err(|e| RcError::pattern(pattern, e.to_string()))?;
        Ok(self
            .current
            .load()
            .iter()
            .filter(|(key, _)| re.is_match(key))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect())
    }

    /// The declaration of `key`.
    pub fn describe(&self, key: &str) -> Result<&'static ParamSpec> {
        lookup(key).ok_or_else(|| RcError::unknown_key(key))
    }

    /// Replaces every value without validation. Only for restoring a
    /// snapshot taken from this store.
    pub(crate) fn restore(&self, snapshot: Arc<ParamMap>) {
        let _guard = self.write_lock.lock();
        self.current.store(snapshot);
    }

    /// Copies the current map, applies `edit`, and publishes the result.
    /// Requires the writer lock.
    fn publish(&self, _guard: &MutexGuard<'_, ()>, edit: impl FnOnce(&mut ParamMap)) {
        let mut next = ParamMap::clone(&self.current.load());
        edit(&mut next);
        self.current.store(Arc::new(next));
    }
}

impl std::fmt::Debug for RcParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RcParams")
            .field("current", &self.current.load_full())
            .finish_non_exhaustive()
    }
}
