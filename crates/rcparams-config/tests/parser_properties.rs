//! Property tests for the rc template parser.

use proptest::prelude::*;
use rcparams_config::parser::parse_template;
use rcparams_config::{RcLoader, RcValue};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.[a-z_]{1,12}"
}

proptest! {
    #[test]
    fn comments_and_padding_do_not_change_entries(
        key in key_strategy(),
        value in "[a-z0-9_.]{1,10}",
        pad_left in " {0,4}",
        pad_mid in " {0,4}",
        comment in "[ -~]{0,20}",
    ) {
        let line = format!("{pad_left}{key}{pad_mid}:{pad_mid}{value}{pad_mid}# {comment}\n");
        let entries = parse_template(&line, "prop").unwrap();
        prop_assert_eq!(entries.len(), 1);
        prop_assert_eq!(&entries[0].key, &key);
        prop_assert_eq!(&entries[0].value, &value);
    }

    #[test]
    fn lines_without_separator_always_fail(word in "[a-z.]{1,20}") {
        let err = parse_template(&format!("{word}\n"), "prop").unwrap_err();
        prop_assert!(err.is_parse());
    }

    #[test]
    fn parsing_is_deterministic(origin in 0i64..=1, subplots in 1i64..10_000) {
        let text = format!("data.index_origin : {origin}\nplot.max_subplots : {subplots}\n");
        let first = RcLoader::load_str(&text, "prop").unwrap();
        let second = RcLoader::load_str(&text, "prop").unwrap();
        prop_assert_eq!(first.get("plot.max_subplots"), Some(&RcValue::Int(subplots)));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn probabilities_in_range_are_accepted(p in 0.000_001f64..=1.0) {
        let text = format!("stats.credible_interval : {p}\n");
        let params = RcLoader::load_str(&text, "prop").unwrap();
        prop_assert_eq!(params.get("stats.credible_interval"), Some(&RcValue::Float(p)));
    }
}
