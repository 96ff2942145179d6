use crate::algorithm::AlgorithmId;
use crate::error::Result;

/// Core algorithm trait that all JWT signature algorithms implement
///
/// Every implementation is a keyed MAC: the same secret signs and verifies.
pub trait Algorithm {
    /// Compute the raw signature over the signing input
    ///
    /// # Arguments
    /// * `signing_input` - The data to sign (header.payload)
    /// * `secret` - The shared secret
    fn sign(&self, signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>>;

    /// Verify a raw (already Base64URL-decoded) signature
    ///
    /// Returns `Err(Error::SignatureInvalid)` on mismatch.
    fn verify(&self, signing_input: &[u8], signature: &[u8], secret: &[u8]) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type SigningAlgorithm = Box<dyn Algorithm + Send + Sync>;

/// Get the signing algorithm for the given algorithm ID
pub fn get_algorithm(algorithm: &AlgorithmId) -> SigningAlgorithm {
    match algorithm {
        AlgorithmId::HS256 => Box::new(super::hmac::HS256),
        AlgorithmId::HS384 => Box::new(super::hmac::HS384),
        AlgorithmId::HS512 => Box::new(super::hmac::HS512),
    }
}
