//! Tests for caller-supplied header fields on issuance

use jwtview::*;
use serde_json::{json, Value};

fn claims(value: Value) -> ClaimSet {
    match value {
        Value::Object(map) => map,
        _ => panic!("test claims must be an object"),
    }
}

#[test]
fn test_custom_fields_are_kept_in_order() {
    let header = claims(json!({ "kid": "key-2024", "cty": "JWT", "x-custom": [1, 2] }));
    let token = encode(Some(&header), &claims(json!({})), b"secret", Some("HS384")).unwrap();

    let decoded = decode(&token).unwrap();
    let keys: Vec<&str> = decoded.header.keys().map(String::as_str).collect();
    assert_eq!(keys, ["alg", "typ", "kid", "cty", "x-custom"]);
    assert_eq!(decoded.token_header().key_id(), Some("key-2024"));
    assert_eq!(decoded.header.get("x-custom"), Some(&json!([1, 2])));
}

#[test]
fn test_typ_can_be_overridden() {
    let header = claims(json!({ "typ": "at+jwt" }));
    let token = encode(Some(&header), &claims(json!({})), b"secret", None).unwrap();
    assert_eq!(decode(&token).unwrap().token_header().token_type(), Some("at+jwt"));
}

#[test]
fn test_alg_override_is_ignored() {
    for forged in [json!("none"), json!("RS256"), json!("HS512"), json!(null), json!(7)] {
        let mut header = ClaimSet::new();
        header.insert("alg".into(), forged.clone());

        let token = encode(Some(&header), &claims(json!({})), b"secret", Some("HS256")).unwrap();
        let decoded = decode(&token).unwrap();
        assert_eq!(
            decoded.header.get("alg"),
            Some(&json!("HS256")),
            "forged alg {forged} leaked into the header"
        );

        let outcome = Verifier::new(VerifyOptions::default())
            .verify(&token, b"secret")
            .unwrap();
        assert!(outcome.valid);
    }
}

#[test]
fn test_unknown_header_fields_do_not_affect_verification() {
    let header = claims(json!({ "jku": "https://attacker.example/jwks", "x5u": "https://x" }));
    let token = encode(Some(&header), &claims(json!({ "sub": "a" })), b"secret", None).unwrap();

    let outcome = Verifier::new(VerifyOptions::default())
        .verify(&token, b"secret")
        .unwrap();
    assert!(outcome.valid);

    let outcome = Verifier::new(VerifyOptions::default())
        .verify(&token, b"other")
        .unwrap();
    assert_eq!(outcome.classification, Classification::SignatureInvalid);
}
