//! CLI integration tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn signet_cmd() -> Command {
    Command::cargo_bin("signet").unwrap()
}

fn write_temp_params(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, json).unwrap();
    path
}

mod canonicalize {
    use super::*;

    #[test]
    fn test_canonicalize_sorts_keys() {
        let file = write_temp_params("signet_canon_sorted.json", r#"{"b":"2","a":"1"}"#);

        signet_cmd()
            .arg("canonicalize")
            .arg(&file)
            .assert()
            .success()
            .stdout(predicate::str::contains("a1b2"));

        fs::remove_file(&file).ok();
    }

    #[test]
    fn test_canonicalize_empty_object() {
        let file = write_temp_params("signet_canon_empty.json", "{}");

        signet_cmd()
            .arg("canonicalize")
            .arg(&file)
            .assert()
            .success()
            .stdout("\n");

        fs::remove_file(&file).ok();
    }

    #[test]
    fn test_canonicalize_nonexistent_file() {
        signet_cmd()
            .arg("canonicalize")
            .arg("nonexistent.json")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read file"));
    }

    #[test]
    fn test_canonicalize_invalid_json() {
        let file = write_temp_params("signet_canon_invalid.json", "{ invalid json }");

        signet_cmd()
            .arg("canonicalize")
            .arg(&file)
            .assert()
            .failure();

        fs::remove_file(&file).ok();
    }
}

mod sign {
    use super::*;

    #[test]
    fn test_sign_reference_vector() {
        let file = write_temp_params("signet_sign_ref.json", r#"{"b":"2","a":"1"}"#);

        signet_cmd()
            .arg("sign")
            .arg(&file)
            .arg("--token")
            .arg("T")
            .arg("--secret")
            .arg("S")
            .arg("--timestamp")
            .arg("100")
            .assert()
            .success()
            .stdout(predicate::str::contains("timestamp: 0000000100"))
            .stdout(predicate::str::contains(
                "signature: 1597152c2e227eac82318c3953ebb258",
            ));

        fs::remove_file(&file).ok();
    }

    #[test]
    fn test_sign_defaults_to_empty_token_and_secret() {
        let file = write_temp_params("signet_sign_defaults.json", "{}");

        signet_cmd()
            .arg("sign")
            .arg(&file)
            .arg("--timestamp")
            .arg("0")
            .assert()
            .success()
            .stdout(predicate::str::contains("signature: "));

        fs::remove_file(&file).ok();
    }
}

mod verify {
    use super::*;

    #[test]
    fn test_verify_accepts_matching_signature() {
        let file = write_temp_params("signet_verify_ok.json", r#"{"b":"2","a":"1"}"#);

        signet_cmd()
            .arg("verify")
            .arg(&file)
            .arg("--signature")
            .arg("1597152c2e227eac82318c3953ebb258")
            .arg("--timestamp")
            .arg("0000000100")
            .arg("--token")
            .arg("T")
            .arg("--secret")
            .arg("S")
            .assert()
            .success()
            .stdout(predicate::str::contains("Signature verified"));

        fs::remove_file(&file).ok();
    }

    #[test]
    fn test_verify_rejects_mismatch() {
        let file = write_temp_params("signet_verify_bad.json", r#"{"b":"2","a":"1"}"#);

        signet_cmd()
            .arg("verify")
            .arg(&file)
            .arg("--signature")
            .arg(&"0".repeat(32))
            .arg("--timestamp")
            .arg("0000000100")
            .arg("--token")
            .arg("T")
            .arg("--secret")
            .arg("S")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Signature mismatch"));

        fs::remove_file(&file).ok();
    }
}
