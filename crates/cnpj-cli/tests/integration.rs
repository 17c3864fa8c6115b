//! Integration tests for CLI commands.

use cnpj_core::{AlphanumericIdEngine, NumericIdEngine};
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const ROOT: &str = "11.222.333/0001-81";

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_cnpj"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_generate_prints_valid_identifier() {
    let (success, stdout, _) = run_cli(&["generate"]);
    assert!(success);
    let id = stdout.trim();
    assert!(NumericIdEngine::new().validate(id), "{id}");
    assert!(id.contains("/0001-"));
}

#[test]
fn test_generate_with_seed_is_reproducible() {
    let (_, first, _) = run_cli(&["generate", "--seed", "7", "--count", "3"]);
    let (_, second, _) = run_cli(&["generate", "--seed", "7", "--count", "3"]);
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 3);
}

#[test]
fn test_generate_alphanumeric_json() {
    let (success, stdout, _) = run_cli(&[
        "generate",
        "--variant",
        "alphanumeric",
        "--count",
        "5",
        "--json",
    ]);
    assert!(success);
    let ids: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(ids.len(), 5);
    let engine = AlphanumericIdEngine::new();
    assert!(ids.iter().all(|id| engine.validate(id)));
}

#[test]
fn test_validate_reports_verdicts() {
    let (success, stdout, _) = run_cli(&["validate", ROOT, "11.222.333/0001-82"]);
    assert!(success);
    assert!(stdout.contains("VERDICT"));
    assert!(stdout.contains("INVALID"));
    assert!(stdout.contains("do not match expected 81"));
}

#[test]
fn test_validate_strict_fails_on_invalid() {
    let (success, _, stderr) = run_cli(&["validate", "--strict", "00.000.000/0000-00"]);
    assert!(!success);
    assert!(stderr.contains("Error: 1 of 1 identifiers are invalid"));

    let (success, _, _) = run_cli(&["validate", "--strict", ROOT]);
    assert!(success);
}

#[test]
fn test_validate_json_output() {
    let (success, stdout, _) = run_cli(&["validate", "--json", "11222333000181"]);
    assert!(success);
    let results: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(results[0]["is_valid"], true);
    assert_eq!(results[0]["formatted"], ROOT);
    assert!(results[0]["reason"].is_null());
}

#[test]
fn test_branches_command() {
    let (success, stdout, _) = run_cli(&["branches", ROOT, "3"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "11.222.333/0001-81",
            "11.222.333/0002-62",
            "11.222.333/0003-43"
        ]
    );
}

#[test]
fn test_branches_rejects_invalid_root() {
    let (success, _, stderr) = run_cli(&["branches", "11.222.333/0001-80", "3"]);
    assert!(!success);
    assert!(stderr.contains("invalid root identifier"));
}

#[test]
fn test_branches_enforces_limit() {
    let (success, _, stderr) = run_cli(&[
        "branches",
        "AB.CDE.FGH/0001-00",
        "1000",
        "--variant",
        "alphanumeric",
    ]);
    assert!(!success);
    assert!(stderr.contains("exceeds the limit of 999"));
}

#[test]
fn test_check_branches_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "11.222.333/0002-62").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "12.345.678/0001-95").unwrap();
    file.flush().unwrap();
    let path = file.path().to_string_lossy().to_string();

    let (success, stdout, _) = run_cli(&[
        "check-branches",
        ROOT,
        "11.222.333/0003-43",
        "--file",
        &path,
        "--json",
    ]);
    assert!(success);

    let verdicts: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let verdicts = verdicts.as_array().unwrap();
    assert_eq!(verdicts.len(), 3);
    assert_eq!(verdicts[0]["original_text"], "11.222.333/0003-43");
    assert_eq!(verdicts[0]["is_valid"], true);
    assert_eq!(verdicts[1]["position"], 2);
    assert_eq!(verdicts[1]["is_valid"], true);
    assert_eq!(verdicts[2]["is_valid"], false);
}

#[test]
fn test_check_branches_strict() {
    let (success, stdout, stderr) = run_cli(&[
        "check-branches",
        "--strict",
        ROOT,
        "12.345.678/0001-95",
    ]);
    assert!(!success);
    assert!(stdout.contains("INVALID"));
    assert!(stderr.contains("1 of 1 identifiers are invalid"));
}

#[test]
fn test_check_branches_missing_file() {
    let (success, _, stderr) = run_cli(&[
        "check-branches",
        ROOT,
        "--file",
        "/nonexistent/branches.txt",
    ]);
    assert!(!success);
    assert!(stderr.contains("failed to read /nonexistent/branches.txt"));
}

#[test]
fn test_complete_command() {
    let (success, stdout, _) = run_cli(&["complete", "12abc3450001", "--variant", "alphanumeric"]);
    assert!(success);
    assert_eq!(stdout.trim(), "12.ABC.345/0001-00");

    let (success, _, stderr) = run_cli(&["complete", "1122233300"]);
    assert!(!success);
    assert!(stderr.contains("expected 12 symbols, found 10"));
}

#[test]
fn test_format_and_unformat() {
    let (_, stdout, _) = run_cli(&["format", "11222333000181"]);
    assert_eq!(stdout.trim(), ROOT);

    let (_, stdout, _) = run_cli(&["unformat", ROOT]);
    assert_eq!(stdout.trim(), "11222333000181");

    let (_, stdout, _) = run_cli(&["unformat", "ab.cde.fgh/0001-00", "--variant", "alphanumeric"]);
    assert_eq!(stdout.trim(), "ABCDEFGH000100");
}
