use crate::algorithm::AlgorithmId;
use crate::claims::{ClaimSet, StandardClaims};
use crate::error::{Error, Result};
use serde_json::Value;

/// JWT header
///
/// Wraps the full header claim set so that unknown fields survive a
/// decode/encode cycle, with typed access to the registered ones.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHeader {
    claims: ClaimSet,
}

impl TokenHeader {
    pub fn from_claims(claims: ClaimSet) -> Self {
        Self { claims }
    }

    /// Build the header for issuing a token signed with `algorithm`
    ///
    /// Starts from `{"alg", "typ": "JWT"}`, overlays `overrides`, then writes
    /// `alg` back so the header always names the algorithm actually used.
    pub fn for_signing(algorithm: AlgorithmId, overrides: Option<&ClaimSet>) -> Self {
        let mut claims = ClaimSet::new();
        claims.insert("alg".to_string(), Value::from(algorithm.as_str()));
        claims.insert("typ".to_string(), Value::from("JWT"));

        if let Some(overrides) = overrides {
            for (name, value) in overrides {
                claims.insert(name.clone(), value.clone());
            }
        }

        claims.insert("alg".to_string(), Value::from(algorithm.as_str()));
        Self { claims }
    }

    /// Parse the declared algorithm
    ///
    /// A missing or non-string `alg` is reported as an unexpected signing
    /// method, as is anything outside the HMAC family.
    pub fn parse_algorithm(&self) -> Result<AlgorithmId> {
        let declared = self.algorithm_str().ok_or_else(|| {
            Error::UnexpectedSigningMethod(match self.claims.get("alg") {
                None => "missing".to_string(),
                Some(other) => other.to_string(),
            })
        })?;

        AlgorithmId::from_str(declared)
    }

    pub fn algorithm_str(&self) -> Option<&str> {
        self.claims.algorithm()
    }

    /// Token type (typically "JWT")
    pub fn token_type(&self) -> Option<&str> {
        self.claims.get("typ").and_then(Value::as_str)
    }

    pub fn key_id(&self) -> Option<&str> {
        self.claims.get("kid").and_then(Value::as_str)
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }
}
