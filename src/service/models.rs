//! Request and response bodies exchanged with a transport

use crate::claims::ClaimSet;
use serde::{Deserialize, Serialize};

/// Request to decode a token without verifying it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodeRequest {
    pub token: String,
}

/// Decoded token parts, or the reason decoding failed
///
/// On failure `header` and `payload` are `None` and `signature` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecodeResponse {
    pub header: Option<ClaimSet>,
    pub payload: Option<ClaimSet>,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeResponse {
    pub fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Request to issue a signed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeRequest {
    /// Extra header fields; `alg` is always replaced
    #[serde(default)]
    pub header: Option<ClaimSet>,
    pub payload: ClaimSet,
    pub secret: String,
    /// HS256, HS384 or HS512; HS256 when absent or empty
    #[serde(default)]
    pub algorithm: Option<String>,
}

/// The issued token, or the reason issuance failed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EncodeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Request to verify a token with a shared secret
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
    pub secret: String,
}

impl DecodeRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.token.is_empty()
    }
}

impl EncodeRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.secret.is_empty()
    }
}

impl VerifyRequest {
    pub fn has_required_fields(&self) -> bool {
        !self.token.is_empty() && !self.secret.is_empty()
    }
}
