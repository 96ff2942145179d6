use crate::algorithm::{get_algorithm, AlgorithmId};
use crate::claims::{to_json, ClaimSet};
use crate::error::{Result, Segment};
use crate::token::TokenHeader;
use crate::utils::base64url;

/// Issue a compact token signed with an HMAC algorithm
///
/// `algorithm` defaults to HS256 when absent or empty; any other tag outside
/// HS256/HS384/HS512 fails with [`Error::UnsupportedAlgorithm`]. Caller
/// header fields are kept except `alg`, which always names the algorithm
/// used for signing.
///
/// [`Error::UnsupportedAlgorithm`]: crate::Error::UnsupportedAlgorithm
pub fn encode(
    header: Option<&ClaimSet>,
    payload: &ClaimSet,
    secret: &[u8],
    algorithm: Option<&str>,
) -> Result<String> {
    let algorithm_id = AlgorithmId::for_signing(algorithm)?;
    let header = TokenHeader::for_signing(algorithm_id, header);

    let header_b64 = base64url::encode_bytes(&to_json(header.claims(), Segment::Header)?);
    let payload_b64 = base64url::encode_bytes(&to_json(payload, Segment::Payload)?);
    let signing_input = format!("{header_b64}.{payload_b64}");

    let signature = get_algorithm(&algorithm_id).sign(signing_input.as_bytes(), secret)?;

    Ok(format!(
        "{signing_input}.{}",
        base64url::encode_bytes(&signature)
    ))
}
