//! # jwtview - Decode, Issue and Verify HMAC-Signed JWTs
//!
//! **jwtview** is an inspection and issuance engine for JSON Web Tokens signed
//! with HMAC (HS256, HS384, HS512). It exposes three stateless operations:
//!
//! - **Decode**: split a compact token and parse its header and payload
//!   without any cryptographic work. The signature is returned as-is.
//! - **Encode**: build a header, serialize header and payload, and sign them.
//! - **Verify**: check the declared algorithm, the signature and the
//!   temporal claims, and report exactly one classification.
//!
//! ## Quick Start
//!
//! ```
//! use jwtview::{decode, encode, ClaimSet, Verifier, VerifyOptions};
//! use serde_json::json;
//!
//! let mut payload = ClaimSet::new();
//! payload.insert("sub".into(), json!("1234567890"));
//!
//! let token = encode(None, &payload, b"secret", Some("HS256"))?;
//!
//! let decoded = decode(&token)?;
//! assert_eq!(decoded.header.get("alg"), Some(&json!("HS256")));
//!
//! let outcome = Verifier::new(VerifyOptions::default()).verify(&token, b"secret")?;
//! assert!(outcome.valid);
//! assert_eq!(outcome.message, "Token is valid");
//! # Ok::<(), jwtview::Error>(())
//! ```
//!
//! ## Verification Outcomes
//!
//! | Classification | valid | message |
//! |---|---|---|
//! | non-HMAC or disallowed `alg` | false | `unexpected signing method` |
//! | signature mismatch | false | `Signature verification failed` |
//! | `exp` in the past | false | `Token is expired` |
//! | `nbf` in the future | false | `Token is not valid yet (nbf claim)` |
//! | structural failure | false | `Token is malformed` |
//! | otherwise | true | `Token is valid` |
//!
//! Signature validity and temporal validity are separate facts. A token that
//! passes within the configured leeway but whose `exp` has already passed is
//! reported as `valid = true` with `Token signature is valid but token is
//! expired`; callers deciding trust should also consult
//! [`ClaimInfo::is_expired`].
//!
//! ## Algorithm Confusion
//!
//! Only HMAC algorithms are accepted. `none`, RSA, ECDSA and any other
//! declared algorithm is rejected before the signature is looked at.
//! Signatures are compared in constant time.
//!
//! ## Features
//!
//! - `server` (default): the axum HTTP transport in [`server`] and the
//!   `jwtview` binary.
//!
//! ## Standards
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) JSON Web Token
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) JSON Web Signature
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) JSON Web Token Best Current Practices

// Core modules
pub mod clock;
pub mod error;
mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;

// Claims and validation
pub mod claims;

// Token codec
pub mod token;

// Operations
pub mod service;
pub mod verifier;

#[cfg(feature = "server")]
pub mod server;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use algorithm::{AlgorithmId, AlgorithmPolicy};
pub use claims::{ClaimInfo, ClaimSet, StandardClaims};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result, Segment};
pub use service::JwtService;
pub use token::{decode, encode, DecodedToken, TokenHeader};
pub use verifier::{Classification, VerificationOutcome, Verifier, VerifyOptions};
