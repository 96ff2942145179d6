//! Stateless JWT operations with a response-object convention
//!
//! [`JwtService`] wraps decode, encode and verify so that malformed input
//! is always answered with a well-formed response carrying an `error`
//! string, never with an `Err`. The one exception is a verification whose
//! signing key is unusable.

mod models;

pub use models::{DecodeRequest, DecodeResponse, EncodeRequest, EncodeResponse, VerifyRequest};

use crate::claims::{ClaimInfo, ClaimSet};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::token;
use crate::verifier::{VerificationOutcome, Verifier, VerifyOptions};
use tracing::debug;

/// Entry point for transports
#[derive(Debug, Clone, Default)]
pub struct JwtService<C = SystemClock> {
    verifier: Verifier<C>,
}

impl JwtService<SystemClock> {
    pub fn new(options: VerifyOptions) -> Self {
        Self::with_clock(SystemClock, options)
    }
}

impl<C: Clock> JwtService<C> {
    pub fn with_clock(clock: C, options: VerifyOptions) -> Self {
        Self {
            verifier: Verifier::with_clock(clock, options),
        }
    }

    /// Decode a token for inspection; no secret is involved
    pub fn decode_token(&self, token: &str) -> DecodeResponse {
        match token::decode(token) {
            Ok(decoded) => DecodeResponse {
                header: Some(decoded.header),
                payload: Some(decoded.payload),
                signature: decoded.signature,
                error: None,
            },
            Err(e) => {
                debug!(error = %e, "decode failed");
                DecodeResponse::failed(e.to_string())
            }
        }
    }

    /// Issue a token from the request's header, payload and secret
    pub fn encode_token(&self, request: &EncodeRequest) -> EncodeResponse {
        let result = token::encode(
            request.header.as_ref(),
            &request.payload,
            request.secret.as_bytes(),
            request.algorithm.as_deref(),
        );

        match result {
            Ok(token) => EncodeResponse {
                token: Some(token),
                error: None,
            },
            Err(e) => {
                debug!(error = %e, "encode failed");
                EncodeResponse {
                    token: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    pub fn verify_token(&self, request: &VerifyRequest) -> Result<VerificationOutcome> {
        self.verifier.verify(&request.token, request.secret.as_bytes())
    }

    /// Project the well-known claims of `claims` as of now
    pub fn extract_claim_info(&self, claims: &ClaimSet) -> ClaimInfo {
        ClaimInfo::from_claims(claims, self.verifier.clock().now())
    }
}
