use crate::claims::{numeric_date, ClaimSet, StandardClaims};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Human-readable projection of the well-known claims in a claim set
///
/// Built on demand from a [`ClaimSet`] and never mutated. Temporal claims
/// that are absent or not numeric leave their fields empty; identity claims
/// that are absent or not strings become empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf_string: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iss: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub aud: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sub: String,
    pub is_expired: bool,
}

impl ClaimInfo {
    /// Project `claims` as seen at instant `now`
    pub fn from_claims(claims: &ClaimSet, now: DateTime<Utc>) -> Self {
        let exp = instant(claims, "exp");
        let iat = instant(claims, "iat");
        let nbf = instant(claims, "nbf");

        Self {
            exp_string: exp.as_ref().map(format_timestamp),
            iat_string: iat.as_ref().map(format_timestamp),
            nbf_string: nbf.as_ref().map(format_timestamp),
            is_expired: exp.is_some_and(|exp| now > exp),
            exp,
            iat,
            nbf,
            iss: claims.issuer().unwrap_or_default().to_string(),
            aud: claims.audience().unwrap_or_default().to_string(),
            sub: claims.subject().unwrap_or_default().to_string(),
        }
    }
}

/// Format an instant as `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn instant(claims: &ClaimSet, name: &str) -> Option<DateTime<Utc>> {
    claims
        .get(name)
        .and_then(numeric_date)
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn claims(value: Value) -> ClaimSet {
        match value {
            Value::Object(map) => map,
            _ => panic!("test claims must be an object"),
        }
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(seconds, 0).unwrap()
    }

    #[test]
    fn test_full_projection() {
        let set = claims(json!({
            "iss": "https://issuer.example",
            "aud": "api",
            "sub": "user123",
            "exp": 1_516_242_622,
            "iat": 1_516_239_022,
            "nbf": 1_516_239_022.75,
        }));

        let info = ClaimInfo::from_claims(&set, at(1_516_240_000));

        assert_eq!(info.iss, "https://issuer.example");
        assert_eq!(info.aud, "api");
        assert_eq!(info.sub, "user123");
        assert_eq!(info.exp, Some(at(1_516_242_622)));
        assert_eq!(info.exp_string.as_deref(), Some("2018-01-18 02:30:22 UTC"));
        assert_eq!(info.iat_string.as_deref(), Some("2018-01-18 01:30:22 UTC"));
        assert_eq!(info.nbf, Some(at(1_516_239_022)));
        assert!(!info.is_expired);
    }

    #[test]
    fn test_expired_is_strict() {
        let set = claims(json!({ "exp": 1000 }));
        assert!(!ClaimInfo::from_claims(&set, at(1000)).is_expired);
        assert!(ClaimInfo::from_claims(&set, at(1001)).is_expired);

        let just_after = at(1000) + chrono::Duration::milliseconds(1);
        assert!(ClaimInfo::from_claims(&set, just_after).is_expired);
    }

    #[test]
    fn test_absent_and_mistyped_claims() {
        let set = claims(json!({
            "iss": 7,
            "aud": ["a", "b"],
            "exp": "soon",
            "iat": null,
        }));

        let info = ClaimInfo::from_claims(&set, at(0));
        assert_eq!(info.iss, "");
        assert_eq!(info.aud, "");
        assert_eq!(info.sub, "");
        assert_eq!(info.exp, None);
        assert_eq!(info.exp_string, None);
        assert_eq!(info.iat, None);
        assert_eq!(info.nbf, None);
        assert!(!info.is_expired);
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let set = claims(json!({ "sub": "x" }));
        let value = serde_json::to_value(ClaimInfo::from_claims(&set, at(0))).unwrap();
        assert_eq!(value, json!({ "sub": "x", "is_expired": false }));
    }

    #[test]
    fn test_serialized_instants_are_rfc3339() {
        let set = claims(json!({ "iat": 1_516_239_022 }));
        let value = serde_json::to_value(ClaimInfo::from_claims(&set, at(0))).unwrap();
        assert_eq!(value["iat"], json!("2018-01-18T01:30:22Z"));
        assert_eq!(value["iat_string"], json!("2018-01-18 01:30:22 UTC"));
    }

    #[test]
    fn test_out_of_range_timestamp_is_absent() {
        let set = claims(json!({ "exp": 1e300 }));
        let info = ClaimInfo::from_claims(&set, at(0));
        assert_eq!(info.exp, None);
        assert!(!info.is_expired);
    }
}
