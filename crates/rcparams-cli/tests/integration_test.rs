//! Integration tests for rcparams-cli crate.
//!
//! Commands run through `run` with an in-memory writer, the same path the
//! binary takes after argument parsing.

use clap::Parser;
use rcparams_cli::{run, Cli, CliError};
use rcparams_common::test_utils::{env_lock, remove_env_var, write_temp_rc};
use rcparams_common::RcError;

fn run_args(args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(args).expect("arguments should parse");
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out).expect("output is UTF-8"))
}

#[test]
fn test_template_prints_bundled_file() {
    let output = run_args(&["rcparams", "template"]).unwrap();
    assert!(output.starts_with("#### RCPARAMS ####"));
    assert!(output.contains("stats.credible_interval : 0.94"));
}

#[test]
fn test_show_lines_in_template_order() {
    let _lock = env_lock();
    let _env = remove_env_var("RCPARAMS_PATH");

    let output = run_args(&["rcparams", "show"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("data.index_origin"));
    assert!(lines[0].ends_with(" : 0"));
    assert!(lines[7].starts_with("stats.ic_scale"));
    assert!(lines[7].ends_with(" : deviance"));
}

#[test]
fn test_show_json_with_pattern_and_rc_file() {
    let file = write_temp_rc("plot.backend : bokeh\nplot.point_estimate : none\n");
    let path = file.path().to_str().unwrap();

    let output = run_args(&["rcparams", "show", "--json", "-p", "^plot\\.", "-f", path]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["plot.backend"], "bokeh");
    assert_eq!(value["plot.max_subplots"], 40);
    assert!(value["plot.point_estimate"].is_null());
    assert!(value.get("data.load").is_none());
}

#[test]
fn test_get_and_unknown_key() {
    let _lock = env_lock();
    let _env = remove_env_var("RCPARAMS_PATH");

    assert_eq!(run_args(&["rcparams", "get", "stats.credible_interval"]).unwrap(), "0.94\n");

    let err = run_args(&["rcparams", "get", "nonexistent.key"]).unwrap_err();
    assert!(matches!(err, CliError::Params(RcError::UnknownKey { .. })));
}

#[test]
fn test_check_reports_changes() {
    let file = write_temp_rc("# mine\ndata.load : EAGER\ndata.index_origin : 0\n");
    let path = file.path().to_str().unwrap();

    let output = run_args(&["rcparams", "check", path]).unwrap();
    assert!(output.contains("ok (2 of 8 keys set)"), "{output}");
    assert!(output.contains("  data.load : eager (default lazy)"));
    assert!(!output.contains("data.index_origin :"));
}

#[test]
fn test_check_rejects_bad_file() {
    let file = write_temp_rc("plot.max_subplots : -1\n");
    let err = run_args(&["rcparams", "check", file.path().to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, CliError::Params(RcError::Validation { .. })));
}

#[test]
fn test_describe() {
    let _lock = env_lock();
    let _env = remove_env_var("RCPARAMS_PATH");

    let output = run_args(&["rcparams", "describe", "plot.point_estimate"]).unwrap();
    assert!(output.contains("group:   plot"));
    assert!(output.contains("rule:    one of mean, median, mode or None"));
    assert!(output.contains("default: mean"));
    assert!(output.contains("current: mean"));
}
