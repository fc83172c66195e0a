//! CLI Smoke Tests
//!
//! Runs the built binary against small inputs. Each command runs from a
//! scratch directory so no local `slp.toml` is picked up.

use std::process::{Command, Output};
use tempfile::TempDir;

use crate::common::fixtures::GENESIS_TXID;
use crate::common::op_return_script;

fn run_cli(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slp-decoder"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("SLP_OUTPUT__FORMAT")
        .output()
        .expect("failed to run slp-decoder")
}

fn genesis_hex() -> String {
    hex::encode(op_return_script(&[
        b"SLP\x00",
        &[0x01],
        b"GENESIS",
        b"USDH",
        b"USD Hybrid",
        b"",
        b"",
        &[4],
        &[2],
        &5_000u64.to_be_bytes(),
    ]))
}

#[test]
fn test_decode_json() {
    let dir = tempfile::tempdir().unwrap();
    let script = genesis_hex();
    let output = run_cli(
        &dir,
        &["decode", &script, "--txid", GENESIS_TXID, "--format", "json"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["status"], "decoded");
    assert_eq!(json["message"]["token_id"], GENESIS_TXID);
    assert_eq!(json["message"]["ticker"], "USDH");
    assert_eq!(json["message"]["baton_vout"], 2);
}

#[test]
fn test_decode_text_reports_invalid_message() {
    let dir = tempfile::tempdir().unwrap();
    let script = hex::encode(op_return_script(&[
        b"SLP\x00",
        &[0x01],
        b"GENESIS",
        b"",
        b"",
        b"",
        &[0xaa; 20],
        &[0],
        b"",
        &1u64.to_be_bytes(),
    ]));
    let output = run_cli(&dir, &["decode", &script, "--txid", GENESIS_TXID, "--format", "text"]);

    // An invalid message is a decode outcome, not a CLI failure
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Invalid SLP message"));
    assert!(stdout.contains("Invalid document hash"));
}

#[test]
fn test_decode_rejects_bad_txid() {
    let dir = tempfile::tempdir().unwrap();
    let script = genesis_hex();
    let output = run_cli(&dir, &["decode", &script, "--txid", "xyz"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid txid"));
}

#[test]
fn test_chunks_listing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_cli(&dir, &["chunks", "6a04534c500001010747454e45534953"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("<absent>"));
    assert!(lines[1].contains("534c5000"));
    assert!(lines[3].contains("GENESIS"));
}

#[test]
fn test_batch_command() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scripts.csv");
    std::fs::write(
        &input,
        format!("txid,script_hex\n{},{}\n{},6a\n", GENESIS_TXID, genesis_hex(), GENESIS_TXID),
    )
    .unwrap();

    let output = run_cli(
        &dir,
        &["batch", input.to_str().unwrap(), "--format", "json"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let statuses: Vec<String> = stdout
        .lines()
        .map(|line| {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            json["status"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(statuses, vec!["decoded", "not_slp"]);
}
