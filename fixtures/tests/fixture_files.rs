use std::{fs, path::Path, process::Command};

use nitro_common::TxInternal;
use nitro_fixtures::{
    read_json,
    verify::{verify_header_fixtures, verify_receipt_fixtures, verify_tx_fixtures},
    FixturePaths, HeaderFixtureFile, ReceiptFixtureFile, TxFixtureFile,
};

fn all_paths(dir: &Path) -> FixturePaths {
    FixturePaths {
        tx_out: dir.join("tx.json"),
        receipt_out: Some(dir.join("receipts/receipts.json")),
        header_out: Some(dir.join("headers/nested/headers.json")),
    }
}

#[test]
fn test_written_files_verify() {
    let dir = tempfile::tempdir().unwrap();
    let paths = all_paths(dir.path());
    paths.write_all().unwrap();

    let txs: TxFixtureFile = read_json(&paths.tx_out).unwrap();
    assert_eq!(verify_tx_fixtures(&txs).unwrap(), 6);

    let receipts: ReceiptFixtureFile =
        read_json(paths.receipt_out.as_ref().unwrap()).unwrap();
    assert_eq!(verify_receipt_fixtures(&receipts).unwrap(), 8);

    let headers: HeaderFixtureFile = read_json(paths.header_out.as_ref().unwrap()).unwrap();
    assert_eq!(verify_header_fixtures(&headers).unwrap(), 3);
}

#[test]
fn test_output_is_deterministic() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    all_paths(first.path()).write_all().unwrap();
    all_paths(second.path()).write_all().unwrap();

    for file in [
        "tx.json",
        "receipts/receipts.json",
        "headers/nested/headers.json",
    ] {
        let a = fs::read(first.path().join(file)).unwrap();
        let b = fs::read(second.path().join(file)).unwrap();
        assert_eq!(a, b, "{file} differs between runs");
    }
}

#[test]
fn test_single_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let paths = all_paths(dir.path());
    paths.write_all().unwrap();

    for path in [
        Some(paths.tx_out.clone()),
        paths.receipt_out.clone(),
        paths.header_out.clone(),
    ]
    .into_iter()
    .flatten()
    {
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"vectors\": ["), "{}", path.display());
        assert!(text.ends_with("}\n"), "{}", path.display());
        assert!(!text.ends_with("\n\n"), "{}", path.display());
    }
}

#[test]
fn test_internal_sender_is_arbos_address() {
    let dir = tempfile::tempdir().unwrap();
    let paths = FixturePaths::new(dir.path().join("tx.json"));
    paths.write_all().unwrap();

    let txs: TxFixtureFile = read_json(&paths.tx_out).unwrap();
    let internal = txs.vectors.iter().find(|v| v.name == "internal").unwrap();
    let arbos = format!("{:#x}", TxInternal::ARBOS_ADDRESS);
    assert_eq!(internal.expect.from.to_lowercase(), arbos);

    for other in txs.vectors.iter().filter(|v| v.name != "internal") {
        assert_eq!(
            other.expect.from,
            "0x1111111111111111111111111111111111111111"
        );
    }
}

#[test]
fn test_header_values_survive_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let paths = all_paths(dir.path());
    paths.write_all().unwrap();

    let headers: HeaderFixtureFile = read_json(paths.header_out.as_ref().unwrap()).unwrap();
    let names: Vec<&str> = headers.vectors.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        ["header_basic", "header_non_arbitrum", "header_large_values"]
    );
    assert_eq!(headers.vectors[2].expect.send_count, u64::MAX);

    let raw = fs::read_to_string(paths.header_out.as_ref().unwrap()).unwrap();
    assert!(raw.contains("\"send_count\": 18446744073709551615"));
}

#[test]
fn test_missing_tx_out_exits_with_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_nitro_fixtures"))
        .arg("-receipt-out")
        .arg("unused.json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required -tx-out path (or legacy -out)"));
}

#[test]
fn test_empty_flag_values_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let tx = dir.path().join("tx.json");

    let status = Command::new(env!("CARGO_BIN_EXE_nitro_fixtures"))
        .arg("-tx-out")
        .arg(&tx)
        .arg("-receipt-out")
        .arg("")
        .status()
        .unwrap();
    assert!(status.success());
    assert!(tx.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

    let legacy = dir.path().join("legacy.json");
    let status = Command::new(env!("CARGO_BIN_EXE_nitro_fixtures"))
        .arg("-out")
        .arg(&legacy)
        .arg("-tx-out")
        .arg("")
        .status()
        .unwrap();
    assert!(status.success());
    assert!(legacy.exists());

    let output = Command::new(env!("CARGO_BIN_EXE_nitro_fixtures"))
        .arg("-tx-out")
        .arg("")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required -tx-out path (or legacy -out)"));
}

#[test]
fn test_generator_then_verifier_binaries() {
    let dir = tempfile::tempdir().unwrap();
    let tx = dir.path().join("tx.json");
    let receipts = dir.path().join("receipts.json");

    let status = Command::new(env!("CARGO_BIN_EXE_nitro_fixtures"))
        .arg("-out")
        .arg(&tx)
        .arg(format!("-receipt-out={}", receipts.display()))
        .status()
        .unwrap();
    assert!(status.success());

    let status = Command::new(env!("CARGO_BIN_EXE_verify_fixtures"))
        .arg("--tx")
        .arg(&tx)
        .arg("--receipt")
        .arg(&receipts)
        .status()
        .unwrap();
    assert!(status.success());

    fs::write(&tx, "{\"vectors\": [{\"name\": \"broken\"}]}\n").unwrap();
    let status = Command::new(env!("CARGO_BIN_EXE_verify_fixtures"))
        .arg("--tx")
        .arg(&tx)
        .status()
        .unwrap();
    assert!(!status.success());
}
