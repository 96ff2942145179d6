//! Per-algorithm round-trip tests
//!
//! Each supported algorithm must:
//! 1. Issue a token whose header names the algorithm
//! 2. Decode back to the exact payload, nested values included
//! 3. Verify with the issuing secret and fail with any other

use jwtview::*;
use serde_json::{json, Value};

const NOW: i64 = 1_700_000_000;

fn claims(value: Value) -> ClaimSet {
    match value {
        Value::Object(map) => map,
        _ => panic!("test claims must be an object"),
    }
}

fn rich_payload() -> ClaimSet {
    claims(json!({
        "iss": "https://example.com",
        "sub": "test-user",
        "aud": "test-app",
        "exp": NOW + 3600,
        "iat": NOW,
        "active": true,
        "deleted": false,
        "manager": null,
        "score": 97.5,
        "negative": -42,
        "roles": ["admin", "editor", 3, null],
        "profile": {
            "name": "Test User",
            "address": { "city": "Berlin", "zip": "10115" },
            "tags": [],
        },
        "empty": {},
    }))
}

fn verifier() -> Verifier<FixedClock> {
    Verifier::with_clock(FixedClock::at_timestamp(NOW), VerifyOptions::default())
}

fn round_trip(alg: &str, secret: &[u8]) {
    let payload = rich_payload();
    let token = encode(None, &payload, secret, Some(alg)).expect("encode failed");

    let decoded = decode(&token).expect("decode failed");
    assert_eq!(decoded.header.get("alg"), Some(&json!(alg)));
    assert_eq!(decoded.payload, payload);

    let outcome = verifier().verify(&token, secret).unwrap();
    assert!(outcome.valid, "{alg}: {outcome:?}");
    assert_eq!(outcome.message, "Token is valid");
    assert_eq!(outcome.claims, Some(payload));

    let outcome = verifier().verify(&token, b"some-other-secret").unwrap();
    assert_eq!(outcome.classification, Classification::SignatureInvalid);
    assert!(outcome.claims.is_none());
}

// ============================================================================
// HMAC Algorithm Round-Trips (HS256, HS384, HS512)
// ============================================================================

mod hmac_tests {
    use super::*;
    use hmac::{Hmac, Mac};
    use sha2::{Sha384, Sha512};

    #[test]
    fn round_trip_hs256() {
        round_trip("HS256", b"test-secret-hs256-key");
    }

    #[test]
    fn round_trip_hs384() {
        round_trip("HS384", b"test-secret-hs384-key-must-be-longer");
    }

    #[test]
    fn round_trip_hs512() {
        round_trip("HS512", b"test-secret-hs512-key-must-be-even-longer-than-hs384");
    }

    #[test]
    fn round_trip_default_algorithm() {
        let token = encode(None, &rich_payload(), b"secret", None).unwrap();
        assert_eq!(decode(&token).unwrap().header.get("alg"), Some(&json!("HS256")));
        assert!(verifier().verify(&token, b"secret").unwrap().valid);
    }

    #[test]
    fn signature_lengths() {
        for (alg, encoded_len) in [("HS256", 43), ("HS384", 64), ("HS512", 86)] {
            let token = encode(None, &ClaimSet::new(), b"secret", Some(alg)).unwrap();
            let signature = token.rsplit('.').next().unwrap();
            assert_eq!(signature.len(), encoded_len, "{alg}");
        }
    }

    #[test]
    fn hs384_matches_manual_hmac() {
        let token = encode(None, &claims(json!({ "sub": "x" })), b"k", Some("HS384")).unwrap();
        let (signing_input, signature) = token.rsplit_once('.').unwrap();

        let mut mac = Hmac::<Sha384>::new_from_slice(b"k").unwrap();
        mac.update(signing_input.as_bytes());
        assert_eq!(signature, utils::encode_bytes(&mac.finalize().into_bytes()));
    }

    #[test]
    fn hs512_matches_manual_hmac() {
        let token = encode(None, &claims(json!({ "sub": "x" })), b"k", Some("HS512")).unwrap();
        let (signing_input, signature) = token.rsplit_once('.').unwrap();

        let mut mac = Hmac::<Sha512>::new_from_slice(b"k").unwrap();
        mac.update(signing_input.as_bytes());
        assert_eq!(signature, utils::encode_bytes(&mac.finalize().into_bytes()));
    }

    #[test]
    fn secrets_are_not_interchangeable() {
        let secrets: [&[u8]; 4] = [b"a", b"b", b"secret", b"secret "];
        for alg in ["HS256", "HS384", "HS512"] {
            for s1 in secrets {
                let token = encode(None, &rich_payload(), s1, Some(alg)).unwrap();
                for s2 in secrets.iter().filter(|s2| **s2 != s1) {
                    let outcome = verifier().verify(&token, s2).unwrap();
                    assert_eq!(outcome.classification, Classification::SignatureInvalid);
                }
            }
        }
    }

    #[test]
    fn unsupported_algorithms_are_rejected_on_issue() {
        for alg in ["RS256", "ES256", "PS512", "EdDSA", "hs256", "HS1024"] {
            let error = encode(None, &ClaimSet::new(), b"secret", Some(alg)).unwrap_err();
            assert_eq!(
                error.to_string(),
                format!("Unsupported algorithm: {alg}. Supported: HS256, HS384, HS512")
            );
        }
    }
}
