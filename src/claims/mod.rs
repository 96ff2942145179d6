//! Claim sets and typed claim access
//!
//! A [`ClaimSet`] is the JSON object carried by a token header or payload.
//! There is no fixed schema, so values stay dynamically typed and every
//! well-known claim is read through [`StandardClaims`], whose accessors
//! return `None` when a claim is absent or has an unexpected type.

mod info;
mod validator;

pub use info::{format_timestamp, ClaimInfo};
pub use validator::{validate_temporal, TemporalValidation};
pub(crate) use validator::ensure_numeric_dates;

use crate::error::{Error, Result, Segment};
use serde_json::{Map, Value};

/// Mapping from claim name to dynamically typed JSON value
///
/// Insertion order is preserved, so a claim set serializes back in the
/// order it was built or parsed.
pub type ClaimSet = Map<String, Value>;

/// Parse decoded segment bytes into a claim set
///
/// The top-level JSON value must be an object; arrays and scalars are
/// rejected.
pub fn parse_claim_set(bytes: &[u8], segment: Segment) -> Result<ClaimSet> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::InvalidJson {
            segment,
            reason: format!("expected a JSON object, found {}", json_type_name(&other)),
        }),
        Err(e) => Err(Error::InvalidJson {
            segment,
            reason: e.to_string(),
        }),
    }
}

/// Serialize a claim set to compact JSON bytes
pub fn to_json(claims: &ClaimSet, segment: Segment) -> Result<Vec<u8>> {
    serde_json::to_vec(claims).map_err(|e| Error::Serialization(format!("{segment}: {e}")))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a JSON number as a whole-second Unix timestamp
///
/// Integers are taken as-is; floating-point values are truncated toward
/// zero.
pub(crate) fn numeric_date(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number
        .as_i64()
        .or_else(|| number.as_f64().map(|f| f.trunc() as i64))
}

/// Typed accessors for the registered JWT claims (RFC 7519 Section 4.1)
pub trait StandardClaims {
    /// Issuer (iss)
    fn issuer(&self) -> Option<&str>;
    /// Subject (sub)
    fn subject(&self) -> Option<&str>;
    /// Audience (aud), only when it is a single string
    fn audience(&self) -> Option<&str>;
    /// Expiration Time (exp) in seconds since the Unix epoch
    fn expiration(&self) -> Option<i64>;
    /// Not Before (nbf) in seconds since the Unix epoch
    fn not_before(&self) -> Option<i64>;
    /// Issued At (iat) in seconds since the Unix epoch
    fn issued_at(&self) -> Option<i64>;
    /// Algorithm (alg), meaningful on header claim sets
    fn algorithm(&self) -> Option<&str>;
}

impl StandardClaims for ClaimSet {
    fn issuer(&self) -> Option<&str> {
        self.get("iss").and_then(Value::as_str)
    }

    fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(Value::as_str)
    }

    fn audience(&self) -> Option<&str> {
        self.get("aud").and_then(Value::as_str)
    }

    fn expiration(&self) -> Option<i64> {
        self.get("exp").and_then(numeric_date)
    }

    fn not_before(&self) -> Option<i64> {
        self.get("nbf").and_then(numeric_date)
    }

    fn issued_at(&self) -> Option<i64> {
        self.get("iat").and_then(numeric_date)
    }

    fn algorithm(&self) -> Option<&str> {
        self.get("alg").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> ClaimSet {
        match value {
            Value::Object(map) => map,
            _ => panic!("test claims must be an object"),
        }
    }

    #[test]
    fn test_parse_object() {
        let parsed = parse_claim_set(br#"{"sub":"user","n":1}"#, Segment::Payload).unwrap();
        assert_eq!(parsed.subject(), Some("user"));
        assert_eq!(parsed.get("n"), Some(&json!(1)));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        for input in [&b"[1,2]"[..], b"\"str\"", b"42", b"null", b"true"] {
            let result = parse_claim_set(input, Segment::Header);
            assert!(
                matches!(
                    result,
                    Err(Error::InvalidJson {
                        segment: Segment::Header,
                        ..
                    })
                ),
                "input {:?} should be rejected",
                String::from_utf8_lossy(input)
            );
        }
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_claim_set(b"not json", Segment::Payload).is_err());
        assert!(parse_claim_set(b"", Segment::Payload).is_err());
        assert!(parse_claim_set(b"{\"a\":", Segment::Payload).is_err());
    }

    #[test]
    fn test_serialization_preserves_order() {
        let parsed =
            parse_claim_set(br#"{"sub":"1","name":"n","iat":1}"#, Segment::Payload).unwrap();
        assert_eq!(
            to_json(&parsed, Segment::Payload).unwrap(),
            br#"{"sub":"1","name":"n","iat":1}"#.to_vec()
        );
    }

    #[test]
    fn test_typed_accessors_ignore_wrong_types() {
        let set = claims(json!({
            "iss": 42,
            "sub": ["a"],
            "aud": ["api", "web"],
            "exp": "tomorrow",
            "nbf": null,
            "iat": true,
        }));

        assert_eq!(set.issuer(), None);
        assert_eq!(set.subject(), None);
        assert_eq!(set.audience(), None);
        assert_eq!(set.expiration(), None);
        assert_eq!(set.not_before(), None);
        assert_eq!(set.issued_at(), None);
    }

    #[test]
    fn test_numeric_dates_accept_integers_and_floats() {
        let set = claims(json!({
            "exp": 1_700_000_000,
            "nbf": 1_600_000_000.9,
            "iat": -5.5,
        }));

        assert_eq!(set.expiration(), Some(1_700_000_000));
        assert_eq!(set.not_before(), Some(1_600_000_000));
        assert_eq!(set.issued_at(), Some(-5));
    }

    #[test]
    fn test_numeric_date_beyond_i64_saturates() {
        let set = claims(json!({ "exp": u64::MAX }));
        assert_eq!(set.expiration(), Some(i64::MAX));
    }
}
