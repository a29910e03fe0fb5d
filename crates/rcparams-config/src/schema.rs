//! Parameter declarations: the static rule table keyed by parameter name.

use serde::Serialize;

/// Validation rule attached to a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Integer restricted to an explicit set.
    IntChoice {
        /// Accepted integers.
        allowed: &'static [i64],
    },
    /// Integer strictly greater than zero.
    PositiveInt,
    /// Float in the half-open range (0, 1].
    Probability,
    /// Lowercase string restricted to an explicit set, optionally nullable.
    Choice {
        /// Accepted strings, lowercase.
        allowed: &'static [&'static str],
        /// Whether `None` is accepted.
        allow_none: bool,
    },
}

impl Rule {
    /// The explicit set of accepted values, for enumerated rules.
    pub fn allowed_values(&self) -> Option<Vec<String>> {
        match self {
            Self::IntChoice { allowed } => Some(allowed.iter().map(ToString::to_string).collect()),
            Self::Choice {
                allowed,
                allow_none,
            } => {
                let mut values: Vec<String> = allowed.iter().map(ToString::to_string).collect();
                if *allow_none {
                    values.push("None".to_string());
                }
                Some(values)
            }
            Self::PositiveInt | Self::Probability => None,
        }
    }

    /// Human readable description of the rule.
    pub fn describe(&self) -> String {
        match self {
            Self::IntChoice { allowed } => format!(
                "integer, one of {}",
                allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::PositiveInt => "positive integer".to_string(),
            Self::Probability => "float in (0, 1]".to_string(),
            Self::Choice {
                allowed,
                allow_none,
            } => {
                let mut text = format!("one of {}", allowed.join(", "));
                if *allow_none {
                    text.push_str(" or None");
                }
                text
            }
        }
    }
}

/// A declared runtime parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamSpec {
    /// Dotted key, e.g. `data.index_origin`.
    pub key: &'static str,
    /// Rule every value of this key must satisfy.
    pub rule: Rule,
    /// One-line description.
    pub doc: &'static str,
}

impl ParamSpec {
    /// Group of the key: the text before the first dot.
    pub fn group(&self) -> &'static str {
        self.key.split_once('.').map_or(self.key, |(group, _)| group)
    }
}

/// Every parameter the library understands.
pub static PARAM_TABLE: &[ParamSpec] = &[
    ParamSpec {
        key: "data.index_origin",
        rule: Rule::IntChoice { allowed: &[0, 1] },
        doc: "First index of generated coordinates",
    },
    ParamSpec {
        key: "data.load",
        rule: Rule::Choice {
            allowed: &["lazy", "eager"],
            allow_none: false,
        },
        doc: "Whether datasets are read into memory on load",
    },
    ParamSpec {
        key: "plot.backend",
        rule: Rule::Choice {
            allowed: &["matplotlib", "bokeh"],
            allow_none: false,
        },
        doc: "Plotting library used to render figures",
    },
    ParamSpec {
        key: "plot.max_subplots",
        rule: Rule::PositiveInt,
        doc: "Upper bound on subplots in one figure",
    },
    ParamSpec {
        key: "plot.point_estimate",
        rule: Rule::Choice {
            allowed: &["mean", "median", "mode"],
            allow_none: true,
        },
        doc: "Point estimate drawn on distribution plots",
    },
    ParamSpec {
        key: "stats.credible_interval",
        rule: Rule::Probability,
        doc: "Probability mass of credible intervals",
    },
    ParamSpec {
        key: "stats.information_criterion",
        rule: Rule::Choice {
            allowed: &["loo", "waic"],
            allow_none: false,
        },
        doc: "Information criterion used for model comparison",
    },
    ParamSpec {
        key: "stats.ic_scale",
        rule: Rule::Choice {
            allowed: &["deviance", "log", "negative_log"],
            allow_none: false,
        },
        doc: "Scale information criteria are reported on",
    },
];

/// Looks up the declaration of `key`.
pub fn lookup(key: &str) -> Option<&'static ParamSpec> {
    PARAM_TABLE.iter().find(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_dotted() {
        let mut seen = HashSet::new();
        for spec in PARAM_TABLE {
            assert!(seen.insert(spec.key), "duplicate key {}", spec.key);
            assert!(spec.key.contains('.'), "key {} has no group", spec.key);
            assert!(!spec.key.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn test_choices_are_lowercase() {
        for spec in PARAM_TABLE {
            if let Rule::Choice { allowed, .. } = spec.rule {
                for value in allowed {
                    assert_eq!(*value, value.to_lowercase(), "{}", spec.key);
                }
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("plot.backend").map(|s| s.group()), Some("plot"));
        assert!(lookup("plot").is_none());
        assert!(lookup("nonexistent.key").is_none());
    }

    #[test]
    fn test_allowed_values() {
        let point = lookup("plot.point_estimate").unwrap();
        assert_eq!(
            point.rule.allowed_values().unwrap(),
            vec!["mean", "median", "mode", "None"]
        );
        let origin = lookup("data.index_origin").unwrap();
        assert_eq!(origin.rule.allowed_values().unwrap(), vec!["0", "1"]);
        assert!(lookup("plot.max_subplots").unwrap().rule.allowed_values().is_none());
    }

    #[test]
    fn test_describe() {
        assert_eq!(Rule::Probability.describe(), "float in (0, 1]");
        assert_eq!(
            lookup("plot.point_estimate").unwrap().rule.describe(),
            "one of mean, median, mode or None"
        );
    }
}
