//! Error types for JWT decoding, issuance and verification
//!
//! Every failure the engine can observe is a variant of [`Error`]. The
//! `Display` output of each variant is the human-readable string that the
//! service layer embeds in its response objects, so the wording is part of
//! the public contract.

use thiserror::Error;

/// Token segment a codec failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
    Signature,
}

impl Segment {
    /// Lowercase segment name as used in error messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            Segment::Header => "header",
            Segment::Payload => "payload",
            Segment::Signature => "signature",
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while processing a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format. Expected 3 parts separated by dots.")]
    FormatInvalid,

    #[error("Failed to decode {segment}: {reason}")]
    InvalidBase64 { segment: Segment, reason: String },

    #[error("Failed to parse {segment} JSON: {reason}")]
    InvalidJson { segment: Segment, reason: String },

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("Token {segment} too large: {size} bytes (maximum: {max} bytes)")]
    SegmentTooLarge {
        segment: Segment,
        size: usize,
        max: usize,
    },

    #[error("Invalid type for claim '{0}': expected a numeric date")]
    InvalidClaimType(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Unsupported algorithm: {0}. Supported: HS256, HS384, HS512")]
    UnsupportedAlgorithm(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    NoneAlgorithmRejected,

    #[error("unexpected signing method: {0}")]
    UnexpectedSigningMethod(String),

    #[error("Algorithm '{found}' not allowed. Allowed: {allowed:?}")]
    AlgorithmNotAllowed { found: String, allowed: Vec<String> },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    #[error("Invalid signing key: {0}")]
    KeyInvalid(String),

    // ============================================================================
    // Temporal Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now}, leeway: {leeway}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, leeway: {leeway}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        leeway: u64,
    },

    // ============================================================================
    // Issuance Errors
    // ============================================================================
    #[error("Failed to serialize {0}")]
    Serialization(String),
}

/// Result type alias for jwtview operations
pub type Result<T> = std::result::Result<T, Error>;
