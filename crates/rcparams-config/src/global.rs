//! The process-wide parameter store.

use crate::store::RcParams;
use once_cell::sync::OnceCell;
use rcparams_common::Result;

static GLOBAL: OnceCell<RcParams> = OnceCell::new();

/// The process-wide store, created on first access.
///
/// The first call loads from `RCPARAMS_PATH` when it is set, else from the
/// bundled defaults. A failed first load is returned to the caller and
/// retried on the next call. Use [`RcParams::reload`] on the returned store
/// to switch to another file later.
pub fn rc_params() -> Result<&'static RcParams> {
    GLOBAL.get_or_try_init(|| RcParams::load(None))
}
