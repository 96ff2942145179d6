use crate::claims::{parse_claim_set, ClaimSet};
use crate::error::{Result, Segment};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE};
use crate::token::{RawToken, TokenHeader};
use crate::utils::base64url;

/// Header and payload claim sets of a token that has not been verified
///
/// Nothing here is trustworthy; this is a read-only view for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    pub header: ClaimSet,
    pub payload: ClaimSet,
    /// The signature segment exactly as it appeared in the token
    pub signature: String,
}

impl DecodedToken {
    /// Typed view over the header
    pub fn token_header(&self) -> TokenHeader {
        TokenHeader::from_claims(self.header.clone())
    }
}

/// Decode a compact token without verifying it
///
/// The header is decoded before the payload, so a token broken in both
/// reports the header failure. The signature is never decoded and no secret
/// is involved.
pub fn decode(token: &str) -> Result<DecodedToken> {
    let raw = RawToken::split(token)?;

    let header = decode_claims(raw.header(), Segment::Header, MAX_DECODED_HEADER_SIZE)?;
    let payload = decode_claims(raw.payload(), Segment::Payload, MAX_DECODED_PAYLOAD_SIZE)?;
    raw.check_signature_size()?;

    Ok(DecodedToken {
        header,
        payload,
        signature: raw.signature().to_string(),
    })
}

pub(crate) fn decode_claims(encoded: &str, segment: Segment, max_size: usize) -> Result<ClaimSet> {
    let bytes = base64url::decode_segment(encoded, segment, max_size)?;
    parse_claim_set(&bytes, segment)
}
