//! Value validation and coercion for declared parameters.

use crate::schema::{lookup, Rule};
use rcparams_common::{RcError, RcValue, Result};

impl Rule {
    /// Checks `value` against this rule and returns its canonical form.
    ///
    /// Strings are coerced to the rule's type: integer rules parse integers,
    /// the probability rule parses floats, enumerations compare and store
    /// lowercase.
    pub fn validate(&self, key: &str, value: RcValue) -> Result<RcValue> {
        match *self {
            Self::IntChoice { allowed } => {
                let n = coerce_int(key, &value)?;
                if allowed.contains(&n) {
                    Ok(RcValue::Int(n))
                } else {
                    Err(RcError::validation(
                        key,
                        format!("{n} is not one of {}", self.describe_allowed()),
                    ))
                }
            }
            Self::PositiveInt => {
                let n = coerce_int(key, &value)?;
                if n > 0 {
                    Ok(RcValue::Int(n))
                } else {
                    Err(RcError::validation(
                        key,
                        format!("expected a positive integer, got {n}"),
                    ))
                }
            }
            Self::Probability => {
                let p = coerce_float(key, &value)?;
                if p > 0.0 && p <= 1.0 {
                    Ok(RcValue::Float(p))
                } else {
                    Err(RcError::validation(
                        key,
                        format!("{p} is outside the range (0, 1]"),
                    ))
                }
            }
            Self::Choice {
                allowed,
                allow_none,
            } => match value {
                RcValue::None if allow_none => Ok(RcValue::None),
                RcValue::Str(s) => {
                    let lowered = s.trim().to_lowercase();
                    if allow_none && (lowered == "none" || lowered == "null") {
                        return Ok(RcValue::None);
                    }
                    if allowed.contains(&lowered.as_str()) {
                        Ok(RcValue::Str(lowered))
                    } else {
                        Err(RcError::validation(
                            key,
                            format!("'{s}' is not one of {}", self.describe_allowed()),
                        ))
                    }
                }
                other => Err(RcError::validation(
                    key,
                    format!(
                        "expected one of {}, got {} {other}",
                        self.describe_allowed(),
                        other.type_name()
                    ),
                )),
            },
        }
    }

    fn describe_allowed(&self) -> String {
        self.allowed_values()
            .map_or_else(|| self.describe(), |values| format!("{{{}}}", values.join(", ")))
    }
}

fn coerce_int(key: &str, value: &RcValue) -> Result<i64> {
    match value {
        RcValue::Int(n) => Ok(*n),
        RcValue::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| RcError::validation(key, format!("'{s}' is not an integer"))),
        other => Err(RcError::validation(
            key,
            format!("expected an integer, got {} {other}", other.type_name()),
        )),
    }
}

fn coerce_float(key: &str, value: &RcValue) -> Result<f64> {
    let parsed = match value {
        RcValue::Float(f) => *f,
        #[allow(clippy::cast_precision_loss)]
        RcValue::Int(n) => *n as f64,
        RcValue::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| RcError::validation(key, format!("'{s}' is not a number")))?,
        RcValue::None => {
            return Err(RcError::validation(key, "expected a number, got None"));
        }
    };
    if parsed.is_nan() {
        return Err(RcError::validation(key, "NaN is not a valid number"));
    }
    Ok(parsed)
}

/// Validates values by parameter key.
pub struct ParamValidator;

impl ParamValidator {
    /// Validates `value` for `key`, returning its canonical form.
    ///
    /// Fails with `UnknownKey` when `key` is not declared.
    pub fn validate(key: &str, value: RcValue) -> Result<RcValue> {
        let spec = lookup(key).ok_or_else(|| RcError::unknown_key(key))?;
        spec.rule.validate(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_origin() {
        assert_eq!(
            ParamValidator::validate("data.index_origin", 1.into()).unwrap(),
            RcValue::Int(1)
        );
        assert_eq!(
            ParamValidator::validate("data.index_origin", "0".into()).unwrap(),
            RcValue::Int(0)
        );
        let err = ParamValidator::validate("data.index_origin", 2.into()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("{0, 1}"));
        assert!(ParamValidator::validate("data.index_origin", 0.5.into())
            .unwrap_err()
            .is_validation());
        assert!(ParamValidator::validate("data.index_origin", "one".into())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_positive_int() {
        assert_eq!(
            ParamValidator::validate("plot.max_subplots", 40.into()).unwrap(),
            RcValue::Int(40)
        );
        for bad in [RcValue::Int(0), RcValue::Int(-3), RcValue::None, "4.5".into()] {
            assert!(
                ParamValidator::validate("plot.max_subplots", bad.clone())
                    .unwrap_err()
                    .is_validation(),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_probability_bounds() {
        assert_eq!(
            ParamValidator::validate("stats.credible_interval", "0.94".into()).unwrap(),
            RcValue::Float(0.94)
        );
        assert_eq!(
            ParamValidator::validate("stats.credible_interval", 1.into()).unwrap(),
            RcValue::Float(1.0)
        );
        for bad in [0.0, -0.1, 1.000_001, f64::NAN, f64::INFINITY] {
            assert!(
                ParamValidator::validate("stats.credible_interval", bad.into())
                    .unwrap_err()
                    .is_validation(),
                "{bad}"
            );
        }
        assert!(ParamValidator::validate("stats.credible_interval", "nan".into())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_choice_is_case_insensitive_and_normalized() {
        assert_eq!(
            ParamValidator::validate("plot.backend", "Bokeh".into()).unwrap(),
            RcValue::from("bokeh")
        );
        assert_eq!(
            ParamValidator::validate("stats.ic_scale", " NEGATIVE_LOG ".into()).unwrap(),
            RcValue::from("negative_log")
        );
        assert!(ParamValidator::validate("data.load", "sometimes".into())
            .unwrap_err()
            .is_validation());
        assert!(ParamValidator::validate("data.load", 1.into())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_nullable_choice() {
        assert_eq!(
            ParamValidator::validate("plot.point_estimate", RcValue::None).unwrap(),
            RcValue::None
        );
        assert_eq!(
            ParamValidator::validate("plot.point_estimate", "None".into()).unwrap(),
            RcValue::None
        );
        assert!(ParamValidator::validate("plot.backend", RcValue::None)
            .unwrap_err()
            .is_validation());
        assert!(ParamValidator::validate("plot.backend", "none".into())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_unknown_key() {
        let err = ParamValidator::validate("nonexistent.key", 1.into()).unwrap_err();
        assert!(err.is_unknown_key());
    }
}
