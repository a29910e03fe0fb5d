//! Scoped parameter overrides.

use crate::loader::RcLoader;
use crate::params::ParamMap;
use crate::store::RcParams;
use rcparams_common::{RcValue, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Guard returned by [`RcParams::context`].
///
/// While it lives the overrides are in effect. Dropping it restores every
/// parameter to the value it had when the guard was created, including keys
/// changed through [`RcParams::set`] in the meantime.
///
/// Nested guards must be dropped in reverse order of creation. Each guard
/// restores the full set it saved, so dropping an outer guard before an
/// inner one lets the inner guard bring the outer overrides back.
#[must_use = "the overrides are undone as soon as the guard is dropped"]
pub struct RcContext<'a> {
    params: &'a RcParams,
    saved: Arc<ParamMap>,
}

impl RcContext<'_> {
    /// The values that will be restored.
    pub fn saved(&self) -> &ParamMap {
        &self.saved
    }
}

impl Drop for RcContext<'_> {
    fn drop(&mut self) {
        self.params.restore(Arc::clone(&self.saved));
        debug!("rcParams context exited, previous values restored");
    }
}

impl RcParams {
    /// Applies `overrides` until the returned guard is dropped.
    ///
    /// Overrides are validated as a batch; on error nothing changes and no
    /// guard is returned.
    pub fn context<I, K, V>(&self, overrides: I) -> Result<RcContext<'_>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RcValue>,
    {
        let saved = self.snapshot();
        self.update(overrides)?;
        debug!("rcParams context entered");
        Ok(RcContext {
            params: self,
            saved,
        })
    }

    /// Applies the keys set in an rc file until the returned guard is dropped.
    ///
    /// Keys the file does not mention keep their current values.
    pub fn context_from_file(&self, path: &Path) -> Result<RcContext<'_>> {
        let overrides = RcLoader::read_overrides(path)?;
        self.context(overrides.iter().map(|(key, value)| (key, value.clone())))
    }
}
