//! Signature and validity verification
//!
//! [`Verifier::verify`] turns a token and a shared secret into exactly one
//! [`Classification`]. The checks run as an ordered decision list, and the
//! first failing step decides the outcome:
//!
//! 1. Structure: segment count, size limits, header Base64URL and JSON
//! 2. Algorithm: the header must declare an HMAC algorithm allowed by the
//!    configured [`AlgorithmPolicy`]
//! 3. Signature: Base64URL-decoded and compared in constant time
//! 4. Payload: Base64URL and JSON, only read once the signature matched
//! 5. Expiry (`exp`), then not-before (`nbf`), both widened by the leeway
//! 6. Registered temporal claims must be numbers when present
//!
//! A token that passes every step is valid. Its expiry is then checked a
//! second time, strictly and without leeway, and a token expired at that
//! instant keeps `valid = true` with a message saying so.
//!
//! Token-content problems never produce an `Err`. Only an unusable signing
//! key does.

use crate::algorithm::{get_algorithm, AlgorithmPolicy};
use crate::claims::{
    ensure_numeric_dates, validate_temporal, ClaimSet, StandardClaims, TemporalValidation,
};
use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result, Segment};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE};
use crate::token::{decode_claims, RawToken, TokenHeader};
use crate::utils::base64url;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

/// Options for token verification
///
/// # Example
///
/// ```
/// use jwtview::{AlgorithmPolicy, VerifyOptions};
///
/// let options = VerifyOptions::default()
///     .leeway(30)
///     .algorithms(AlgorithmPolicy::hs256_only());
/// assert_eq!(options.leeway_seconds(), 30);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VerifyOptions {
    temporal: TemporalValidation,
    policy: AlgorithmPolicy,
}

impl VerifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow clock skew of up to `seconds` on the `exp` and `nbf` checks
    ///
    /// Clamped to five minutes.
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.temporal = self.temporal.leeway(seconds);
        self
    }

    /// Restrict the accepted algorithms (default: any HMAC variant)
    pub fn algorithms(mut self, policy: AlgorithmPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn leeway_seconds(&self) -> u64 {
        self.temporal.leeway_seconds()
    }

    pub fn policy(&self) -> &AlgorithmPolicy {
        &self.policy
    }
}

/// The mutually exclusive verdicts of a verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    UnexpectedSigningMethod,
    SignatureInvalid,
    Expired,
    NotYetValid,
    Malformed,
    Valid,
}

impl Classification {
    /// Display message for the verdict
    pub const fn message(&self) -> &'static str {
        match self {
            Classification::UnexpectedSigningMethod => "unexpected signing method",
            Classification::SignatureInvalid => "Signature verification failed",
            Classification::Expired => "Token is expired",
            Classification::NotYetValid => "Token is not valid yet (nbf claim)",
            Classification::Malformed => "Token is malformed",
            Classification::Valid => "Token is valid",
        }
    }

    fn of(error: &Error) -> Self {
        match error {
            Error::UnexpectedSigningMethod(_)
            | Error::NoneAlgorithmRejected
            | Error::UnsupportedAlgorithm(_)
            | Error::AlgorithmNotAllowed { .. } => Classification::UnexpectedSigningMethod,
            Error::SignatureInvalid => Classification::SignatureInvalid,
            Error::TokenExpired { .. } => Classification::Expired,
            Error::TokenNotYetValid { .. } => Classification::NotYetValid,
            _ => Classification::Malformed,
        }
    }
}

/// Message for a token whose signature matched but whose `exp` has passed
pub const VALID_BUT_EXPIRED_MESSAGE: &str = "Token signature is valid but token is expired";

/// Result of verifying a token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationOutcome {
    #[serde(skip)]
    pub classification: Classification,
    pub valid: bool,
    pub message: String,
    /// Payload claims, attached when valid or expired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<ClaimSet>,
    /// Diagnostic for any failed verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationOutcome {
    fn rejected(error: &Error, claims: Option<ClaimSet>) -> Self {
        let classification = Classification::of(error);
        Self {
            classification,
            valid: false,
            message: classification.message().to_string(),
            claims,
            error: Some(error.to_string()),
        }
    }

    fn accepted(claims: ClaimSet, expired: bool) -> Self {
        let message = if expired {
            VALID_BUT_EXPIRED_MESSAGE
        } else {
            Classification::Valid.message()
        };

        Self {
            classification: Classification::Valid,
            valid: true,
            message: message.to_string(),
            claims: Some(claims),
            error: None,
        }
    }
}

/// A failed step, with the payload claims when they were already read
struct Rejection {
    error: Error,
    claims: Option<ClaimSet>,
}

impl From<Error> for Rejection {
    fn from(error: Error) -> Self {
        Self {
            error,
            claims: None,
        }
    }
}

/// Verifies tokens against a shared secret
///
/// Holds no per-token state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Verifier<C = SystemClock> {
    clock: C,
    options: VerifyOptions,
}

impl Verifier<SystemClock> {
    pub fn new(options: VerifyOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl<C: Clock> Verifier<C> {
    pub fn with_clock(clock: C, options: VerifyOptions) -> Self {
        Self { clock, options }
    }

    pub fn options(&self) -> &VerifyOptions {
        &self.options
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Verify `token` with `secret`
    ///
    /// Returns `Err` only for [`Error::KeyInvalid`]; every other problem is
    /// reported through the outcome.
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<VerificationOutcome> {
        let now = self.clock.now();

        match self.evaluate(token, secret, now.timestamp()) {
            Ok(claims) => {
                let expired = expired_at(&claims, now);
                debug!(expired, "token verified");
                Ok(VerificationOutcome::accepted(claims, expired))
            }
            Err(Rejection {
                error: error @ Error::KeyInvalid(_),
                ..
            }) => {
                warn!(%error, "signing key unusable");
                Err(error)
            }
            Err(Rejection { error, claims }) => {
                let outcome = VerificationOutcome::rejected(&error, claims);
                debug!(classification = ?outcome.classification, %error, "token rejected");
                Ok(outcome)
            }
        }
    }

    fn evaluate(
        &self,
        token: &str,
        secret: &[u8],
        now: i64,
    ) -> std::result::Result<ClaimSet, Rejection> {
        let raw = RawToken::split(token)?;
        raw.check_signature_size()?;

        let header = decode_claims(raw.header(), Segment::Header, MAX_DECODED_HEADER_SIZE)?;
        let header = TokenHeader::from_claims(header);

        let algorithm_id = header
            .parse_algorithm()
            .and_then(|id| self.options.policy.validate(&id).map(|()| id))
            .map_err(|e| {
                debug!(reason = %e, "algorithm rejected");
                Error::UnexpectedSigningMethod(describe_alg(&header))
            })?;

        let signature = base64url::decode_segment(
            raw.signature(),
            Segment::Signature,
            algorithm_id.signature_len(),
        )
        .map_err(|e| match e {
            // A longer MAC than the algorithm produces can never match
            Error::SegmentTooLarge { .. } => Error::SignatureInvalid,
            other => other,
        })?;

        get_algorithm(&algorithm_id).verify(raw.signing_input().as_bytes(), &signature, secret)?;

        let claims = decode_claims(raw.payload(), Segment::Payload, MAX_DECODED_PAYLOAD_SIZE)?;

        if let Err(error) = validate_temporal(&claims, now, &self.options.temporal) {
            let claims = matches!(error, Error::TokenExpired { .. }).then_some(claims);
            return Err(Rejection { error, claims });
        }

        ensure_numeric_dates(&claims)?;

        Ok(claims)
    }
}

fn describe_alg(header: &TokenHeader) -> String {
    match header.claims().get("alg") {
        Some(serde_json::Value::String(alg)) => alg.chars().take(64).collect(),
        Some(other) => other.to_string(),
        None => "missing".to_string(),
    }
}

/// Strict expiry at instant precision, as reported by `ClaimInfo::is_expired`
fn expired_at(claims: &ClaimSet, now: DateTime<Utc>) -> bool {
    claims
        .expiration()
        .and_then(|exp| DateTime::from_timestamp(exp, 0))
        .is_some_and(|exp| now > exp)
}
