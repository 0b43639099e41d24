#![allow(missing_docs)]
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_roundtrip_over_base64() {
    Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("encrypt")
        .arg("--message")
        .arg("HELLO")
        .arg("--otp")
        .arg("XKCD9")
        .arg("--charset")
        .arg("base64")
        .assert()
        .success()
        .stdout("eONOL\n");

    Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("decrypt")
        .arg("--message")
        .arg("eONOL")
        .arg("--otp")
        .arg("XKCD9")
        .arg("--charset")
        .arg("base64")
        .assert()
        .success()
        .stdout("HELLO\n");
}

#[test]
fn test_cli_roundtrip_with_crc32_tag() {
    let pad = "XKCD9XKCD9XKCD9";

    let encrypt_output = Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("encrypt")
        .arg("-m")
        .arg("HELLO")
        .arg("-o")
        .arg(pad)
        .arg("--charset")
        .arg("base64")
        .arg("--checksum")
        .arg("crc32")
        .output()
        .expect("Failed to run encrypt");
    assert!(encrypt_output.status.success());

    let ciphertext = String::from_utf8(encrypt_output.stdout)
        .unwrap()
        .trim()
        .to_string();
    // Message plus the 8-symbol tag.
    assert_eq!(ciphertext.chars().count(), 13);

    Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("decrypt")
        .arg("-m")
        .arg(&ciphertext)
        .arg("-o")
        .arg(pad)
        .arg("--charset")
        .arg("base64")
        .arg("--checksum")
        .arg("crc32")
        .assert()
        .success()
        .stdout("HELLO\n");
}

#[test]
fn test_cli_emits_nothing_for_unsupported_symbols() {
    Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("encrypt")
        .arg("-m")
        .arg("HEL LO")
        .arg("-o")
        .arg("XKCD9XKCD9")
        .arg("--charset")
        .arg("base64")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported symbol"));
}

#[test]
fn test_cli_emits_nothing_for_tampered_ciphertext() {
    let pad = "XKCD9XKCD9XKCD9";

    let encrypt_output = Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("encrypt")
        .arg("-m")
        .arg("HELLO")
        .arg("-o")
        .arg(pad)
        .arg("--charset")
        .arg("base64")
        .arg("--checksum")
        .arg("crc32")
        .output()
        .expect("Failed to run encrypt");
    let ciphertext = String::from_utf8(encrypt_output.stdout)
        .unwrap()
        .trim()
        .to_string();

    // Flip the first ciphertext symbol ('e' for this message and pad).
    let tampered = format!("A{}", &ciphertext[1..]);

    Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("decrypt")
        .arg("-m")
        .arg(&tampered)
        .arg("-o")
        .arg(pad)
        .arg("--charset")
        .arg("base64")
        .arg("--checksum")
        .arg("crc32")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("checksum verification failed"));
}

#[test]
fn test_cli_emits_nothing_for_short_pad() {
    Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("encrypt")
        .arg("-m")
        .arg("HELLO")
        .arg("-o")
        .arg("XKCD9")
        .arg("--charset")
        .arg("base64")
        .arg("--checksum")
        .arg("crc32")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("pad too short"));
}

#[test]
fn test_pad_generate_writes_pad_and_record() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let pad_path = temp_dir.path().join("field.pad");

    let generate_output = Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("pad")
        .arg("generate")
        .arg("--output")
        .arg(&pad_path)
        .arg("--length")
        .arg("200")
        .arg("--charset")
        .arg("base64")
        .output()
        .expect("Failed to run pad generate");
    assert!(generate_output.status.success());

    let pad_id = String::from_utf8(generate_output.stdout)
        .unwrap()
        .trim()
        .to_string();
    assert!(!pad_id.is_empty(), "Pad ID should not be empty");

    let pad_text = fs::read_to_string(&pad_path).expect("Failed to read pad file");
    assert_eq!(pad_text.chars().count(), 200);

    let record_json = fs::read_to_string(temp_dir.path().join("field.pad.json"))
        .expect("Failed to read pad record");
    assert!(record_json.contains(&pad_id));
    assert!(record_json.contains("base64"));
}

#[test]
fn test_sheet_renders_ruler_key_and_counts() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let sheet_path = temp_dir.path().join("sheet.txt");

    Command::cargo_bin("paperpad-cli")
        .unwrap()
        .arg("sheet")
        .arg("--output")
        .arg(&sheet_path)
        .arg("--chars-per-line")
        .arg("20")
        .arg("--lines-per-page")
        .arg("5")
        .assert()
        .success();

    let page = fs::read_to_string(&sheet_path).expect("Failed to read sheet");
    assert!(page.contains("0    5    10   15"));
    assert!(page.contains("encryption is (message+otp)%95"));
    assert!(page.lines().any(|line| line.starts_with("80  ")));
}
