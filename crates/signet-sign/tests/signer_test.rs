//! Signature conformance tests
//!
//! Reference digests were computed independently of this crate over the
//! documented raw concatenations.

use signet_core::{ParamValue, ParameterSet, SecretTable, SigningContext, Timestamp};
use signet_sign::{compute, is_valid_signature, sign, verify};

#[test]
fn test_reference_vector() {
    // params {"b":"2","a":"1"}, timestamp "0000000100", token "T",
    // secret "S": canonical "a1b2", raw "MDAwMDAwMDEwMA==TSa1b2".
    let params = ParameterSet::new().with("b", "2").with("a", "1");
    let signature = compute(&params, "0000000100", "T", "S");

    assert_eq!(signature.as_str(), "1597152c2e227eac82318c3953ebb258");
}

#[test]
fn test_reference_vector_empty_params() {
    // raw "MDAwMDAwMDEwMA==TS"
    let signature = compute(&ParameterSet::new(), "0000000100", "T", "S");
    assert_eq!(signature.as_str(), "b3852ec77f7f1935656a8d44a370cce6");
}

#[test]
fn test_reference_vector_list_stripping() {
    // canonical `ids["1","2"]`, stripped raw "MDAwMDAwMDEwMA==TSids1,2"
    let params = ParameterSet::new().with("ids", ParamValue::List(vec!["1".into(), "2".into()]));
    let signature = compute(&params, "0000000100", "T", "S");

    assert_eq!(signature.as_str(), "2af0ee9df88ff6473d0ca1e777667f10");
}

#[test]
fn test_reference_vector_nested_map_stripping() {
    // canonical `meta{"x":"1"}`, stripped raw "MDAwMDAwMDEwMA==TSmeta{x:1}" -
    // braces survive, quotes do not.
    let mut nested = std::collections::BTreeMap::new();
    nested.insert("x".to_string(), ParamValue::from("1"));

    let params = ParameterSet::new().with("meta", ParamValue::Map(nested));
    let signature = compute(&params, "0000000100", "T", "S");

    assert_eq!(signature.as_str(), "fdd21716fe7c3f52851f737688d04d56");
}

#[test]
fn test_reference_vector_realistic_timestamp() {
    // raw "MTcwMDAwMDAwMA==tokseca1b2"
    let params = ParameterSet::new().with("a", "1").with("b", "2");
    let timestamp = Timestamp::from_unix_seconds(1_700_000_000);
    let signature = compute(&params, timestamp.as_str(), "tok", "sec");

    assert_eq!(signature.as_str(), "ba424a4407428704dd96bd9e89ee1c71");
}

#[test]
fn test_context_driven_sign_matches_compute() {
    let params = ParameterSet::new().with("a", "1");
    let timestamp = Timestamp::from_unix_seconds(100);
    let ctx = SigningContext::new("T".to_string(), SecretTable::new().with("/v1/x", "S"));

    let via_context = sign(&params, &timestamp, "/v1/x", &ctx);
    let explicit = compute(&params, timestamp.as_str(), "T", "S");

    assert_eq!(via_context, explicit);
}

#[test]
fn test_unknown_path_signs_with_empty_secret() {
    let params = ParameterSet::new().with("a", "1");
    let timestamp = Timestamp::from_unix_seconds(100);
    let ctx = SigningContext::new("T".to_string(), SecretTable::new());

    let via_context = sign(&params, &timestamp, "/no/such/path", &ctx);
    let explicit = compute(&params, timestamp.as_str(), "T", "");

    assert_eq!(via_context, explicit);
}

#[test]
fn test_signature_format_always_valid() {
    let inputs = [
        (ParameterSet::new(), "0000000000", "", ""),
        (ParameterSet::new().with("k", "v"), "0000000100", "T", "S"),
        (ParameterSet::new().with("a", 1), "1700000000", "token", "secret"),
    ];

    for (params, ts, token, secret) in inputs {
        let signature = compute(&params, ts, token, secret);
        assert!(is_valid_signature(signature.as_str()));
    }
}

#[test]
fn test_avalanche_on_single_byte_changes() {
    let params = ParameterSet::new().with("a", "1");
    let base = compute(&params, "0000000100", "T", "S");

    let value_changed = ParameterSet::new().with("a", "2");
    let key_changed = ParameterSet::new().with("b", "1");

    assert_ne!(compute(&value_changed, "0000000100", "T", "S"), base);
    assert_ne!(compute(&key_changed, "0000000100", "T", "S"), base);
    assert_ne!(compute(&params, "0000000200", "T", "S"), base);
    assert_ne!(compute(&params, "0000000100", "U", "S"), base);
    assert_ne!(compute(&params, "0000000100", "T", "U"), base);
}

#[test]
fn test_verify_accepts_own_signature() {
    let params = ParameterSet::new().with("user", "alice").with("n", 1);
    let signature = compute(&params, "1700000000", "tok", "sec");

    assert!(verify(&params, "1700000000", "tok", "sec", signature.as_str()));
}

#[test]
fn test_verify_rejects_tampered_params() {
    let params = ParameterSet::new().with("amount", "10");
    let signature = compute(&params, "1700000000", "tok", "sec");

    let tampered = ParameterSet::new().with("amount", "1000");
    assert!(!verify(&tampered, "1700000000", "tok", "sec", signature.as_str()));
}

#[test]
fn test_verify_rejects_wrong_secret() {
    let params = ParameterSet::new().with("a", "1");
    let signature = compute(&params, "1700000000", "tok", "sec");

    assert!(!verify(&params, "1700000000", "tok", "other", signature.as_str()));
}
