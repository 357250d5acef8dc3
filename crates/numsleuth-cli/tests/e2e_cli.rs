//! End-to-end tests for the command-line frontend.
//!
//! Commands are parsed with `Cli::try_parse_from` and run against real files
//! in a temporary directory; output is captured in a `Vec<u8>` instead of
//! stdout, so no process needs to be spawned.
use clap::Parser;
use numsleuth_cli::{run, Cli};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn run_args<I, S>(args: I) -> anyhow::Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let mut buf = Vec::new();
    run(&cli, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// ── divisors ─────────────────────────────────────────────────────────────────

#[test]
fn divisors_uses_reference_mapping_by_default() {
    let out = run_args(["numsleuth", "divisors", "--start", "1", "--end", "10"]).unwrap();
    assert_eq!(out, "[1, 2, capsuni, 4, 5, capsuni, mere, pere, capsuni, 10]\n");
}

#[test]
fn divisors_reference_range_has_ten_thousand_entries() {
    let out = run_args(["numsleuth", "divisors", "--format", "json"]).unwrap();
    let labels: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(labels.len(), 10_000);
    assert_eq!(labels[6], "mere");
    assert_eq!(labels[20], "gutui");
    assert_eq!(labels[99], "100");
}

#[test]
fn divisors_map_flags_replace_mapping() {
    let out = run_args([
        "numsleuth", "divisors", "--start", "1", "--end", "6", "--map", "2=even",
    ])
    .unwrap();
    assert_eq!(out, "[1, even, 3, even, 5, even]\n");
}

#[test]
fn divisors_invalid_range_is_an_error() {
    assert!(run_args(["numsleuth", "divisors", "--start", "0"]).is_err());
    assert!(run_args(["numsleuth", "divisors", "--start", "9", "--end", "3"]).is_err());
}

#[test]
fn divisors_invalid_map_entry_is_an_error() {
    assert!(run_args(["numsleuth", "divisors", "--map", "seven"]).is_err());
}

// ── max-sum ──────────────────────────────────────────────────────────────────

#[test]
fn max_sum_prints_total_for_both_strategies() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let a = tmp.path().join("a.txt");
    let b = tmp.path().join("b.txt");
    fs::write(&a, "kjsfd23rnkjnef34ohi43;3g34;34t34t;ggwse").unwrap();
    fs::write(&b, "x7;y8").unwrap();

    for strategy in ["threads", "pool"] {
        let out = run_args([
            "numsleuth".to_string(),
            "max-sum".to_string(),
            path_arg(&a),
            path_arg(&b),
            "--strategy".to_string(),
            strategy.to_string(),
        ])
        .unwrap();
        assert_eq!(out, "51\n", "strategy {strategy}");
    }
}

#[test]
fn max_sum_missing_file_policies() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let a = tmp.path().join("a.txt");
    fs::write(&a, "100").unwrap();
    let gone = tmp.path().join("gone.txt");

    let base = ["numsleuth".to_string(), "max-sum".to_string(), path_arg(&a), path_arg(&gone)];

    let out = run_args(base.clone()).unwrap();
    assert_eq!(out, "99\n");

    let mut zero = base.to_vec();
    zero.extend(["--missing".to_string(), "zero".to_string()]);
    assert_eq!(run_args(zero).unwrap(), "100\n");

    let mut abort = base.to_vec();
    abort.extend(["--missing".to_string(), "abort".to_string()]);
    assert!(run_args(abort).is_err());
}

#[test]
fn max_sum_json_report() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let a = tmp.path().join("a.txt");
    fs::write(&a, "12;34").unwrap();

    let out = run_args([
        "numsleuth".to_string(),
        "max-sum".to_string(),
        path_arg(&a),
        "--format".to_string(),
        "json".to_string(),
    ])
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["total"], 34);
    assert_eq!(value["files"][0]["outcome"]["status"], "max");
    assert_eq!(value["files"][0]["outcome"]["value"], 34);
}

#[test]
fn max_sum_without_paths_is_an_error() {
    assert!(run_args(["numsleuth", "max-sum"]).is_err());
}

// ── config file ──────────────────────────────────────────────────────────────

#[test]
fn config_file_supplies_paths_and_policy() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let a = tmp.path().join("a.txt");
    fs::write(&a, "40;2").unwrap();
    let config = tmp.path().join("numsleuth.json");
    let json = serde_json::json!({
        "aggregator": {
            "paths": [a, tmp.path().join("gone.txt")],
            "strategy": "pool",
            "missing": "zero"
        }
    });
    fs::write(&config, json.to_string()).unwrap();

    let out = run_args([
        "numsleuth".to_string(),
        "--config".to_string(),
        path_arg(&config),
        "max-sum".to_string(),
    ])
    .unwrap();
    assert_eq!(out, "40\n");

    // Flags override the file.
    let out = run_args([
        "numsleuth".to_string(),
        "max-sum".to_string(),
        "--missing".to_string(),
        "sentinel".to_string(),
        "--config".to_string(),
        path_arg(&config),
    ])
    .unwrap();
    assert_eq!(out, "39\n");
}

#[test]
fn config_file_supplies_divisor_settings() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let config = tmp.path().join("numsleuth.json");
    fs::write(
        &config,
        r#"{ "divisors": { "start": 20, "end": 22, "mapping": { "11": "eleven" } } }"#,
    )
    .unwrap();

    let out = run_args([
        "numsleuth".to_string(),
        "divisors".to_string(),
        "-c".to_string(),
        path_arg(&config),
    ])
    .unwrap();
    assert_eq!(out, "[20, 21, eleven]\n");
}

#[test]
fn missing_config_file_is_an_error() {
    assert!(run_args(["numsleuth", "-c", "/definitely/not/here.json", "divisors"]).is_err());
}
