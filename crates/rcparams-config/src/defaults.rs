//! The bundled default template and the defaults compiled from it.

use crate::loader::overlay;
use crate::params::ParamMap;
use crate::parser::parse_template;
use crate::schema::PARAM_TABLE;
use once_cell::sync::OnceCell;
use rcparams_common::{RcError, Result};
use tracing::debug;

/// Text of the template shipped with the library.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/rcparams.template");

/// Name used for the bundled template in error messages.
pub const BUNDLED_SOURCE_NAME: &str = "<bundled>";

static DEFAULTS: OnceCell<ParamMap> = OnceCell::new();

/// Parses and validates the bundled template.
///
/// Every key of the template must be declared in the parameter table and
/// every declared parameter must appear in the template.
pub fn build_defaults() -> Result<ParamMap> {
    let entries = parse_template(DEFAULT_TEMPLATE, BUNDLED_SOURCE_NAME)?;
    let mut map = ParamMap::new();
    overlay(&mut map, &entries, BUNDLED_SOURCE_NAME)?;

    if let Some(missing) = PARAM_TABLE.iter().find(|spec| !map.contains_key(spec.key)) {
        return Err(RcError::validation(
            missing.key,
            "declared but missing from the bundled template",
        ));
    }

    debug!(count = map.len(), "compiled bundled defaults");
    Ok(map)
}

/// The bundled defaults, compiled on first use.
pub fn bundled_defaults() -> Result<&'static ParamMap> {
    DEFAULTS.get_or_try_init(build_defaults)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcparams_common::RcValue;

    #[test]
    fn test_bundled_template_compiles() {
        let defaults = build_defaults().unwrap();
        assert_eq!(defaults.len(), PARAM_TABLE.len());
    }

    #[test]
    fn test_literal_defaults() {
        let defaults = bundled_defaults().unwrap();
        let expected = [
            ("data.index_origin", RcValue::Int(0)),
            ("data.load", RcValue::from("lazy")),
            ("plot.backend", RcValue::from("matplotlib")),
            ("plot.max_subplots", RcValue::Int(40)),
            ("plot.point_estimate", RcValue::from("mean")),
            ("stats.credible_interval", RcValue::Float(0.94)),
            ("stats.information_criterion", RcValue::from("loo")),
            ("stats.ic_scale", RcValue::from("deviance")),
        ];
        for (key, value) in expected {
            assert_eq!(defaults.get(key), Some(&value), "{key}");
        }
    }

    #[test]
    fn test_template_order_matches_table() {
        let defaults = bundled_defaults().unwrap();
        let table: Vec<&str> = PARAM_TABLE.iter().map(|spec| spec.key).collect();
        assert_eq!(defaults.keys().collect::<Vec<_>>(), table);
    }

    #[test]
    fn test_parsing_twice_is_deterministic() {
        assert_eq!(build_defaults().unwrap(), build_defaults().unwrap());
    }
}
