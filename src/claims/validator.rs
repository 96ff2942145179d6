use crate::claims::{ClaimSet, StandardClaims};
use crate::error::{Error, Result};
use crate::limits::MAX_LEEWAY_SECONDS;
use serde_json::Value;

/// Registered claims that must hold a numeric date when present
const NUMERIC_DATE_CLAIMS: [&str; 3] = ["exp", "nbf", "iat"];

/// Configuration for temporal claim validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemporalValidation {
    leeway_seconds: u64,
}

impl TemporalValidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerate clock differences of up to `seconds` on `exp` and `nbf`
    ///
    /// Values above five minutes are clamped.
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds.min(MAX_LEEWAY_SECONDS);
        self
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.leeway_seconds
    }
}

/// Check `exp` and `nbf` against `now` (Unix seconds)
///
/// Expiry is checked first. Claims that are absent or not numeric are
/// skipped.
pub fn validate_temporal(claims: &ClaimSet, now: i64, config: &TemporalValidation) -> Result<()> {
    let leeway = config.leeway_seconds as i64;

    if let Some(exp) = claims.expiration() {
        if now > exp.saturating_add(leeway) {
            return Err(Error::TokenExpired {
                expired_at: exp,
                now,
                leeway: config.leeway_seconds,
            });
        }
    }

    if let Some(nbf) = claims.not_before() {
        if now < nbf.saturating_sub(leeway) {
            return Err(Error::TokenNotYetValid {
                not_before: nbf,
                now,
                leeway: config.leeway_seconds,
            });
        }
    }

    Ok(())
}

/// Reject registered temporal claims that are present but not numbers
pub(crate) fn ensure_numeric_dates(claims: &ClaimSet) -> Result<()> {
    for name in NUMERIC_DATE_CLAIMS {
        match claims.get(name) {
            None | Some(Value::Number(_)) => {}
            Some(_) => return Err(Error::InvalidClaimType(name.to_string())),
        }
    }
    Ok(())
}
