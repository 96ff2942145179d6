use crate::algorithm::Algorithm;
use crate::error::{Error, Result};

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HS256 algorithm (HMAC with SHA-256)
pub struct HS256;

/// HS384 algorithm (HMAC with SHA-384)
pub struct HS384;

/// HS512 algorithm (HMAC with SHA-512)
pub struct HS512;

impl Algorithm for HS256 {
    fn sign(&self, signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        mac_hs256(signing_input, secret)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], secret: &[u8]) -> Result<()> {
        compare(signature, &mac_hs256(signing_input, secret)?)
    }
}

impl Algorithm for HS384 {
    fn sign(&self, signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        mac_hs384(signing_input, secret)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], secret: &[u8]) -> Result<()> {
        compare(signature, &mac_hs384(signing_input, secret)?)
    }
}

impl Algorithm for HS512 {
    fn sign(&self, signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        mac_hs512(signing_input, secret)
    }

    fn verify(&self, signing_input: &[u8], signature: &[u8], secret: &[u8]) -> Result<()> {
        compare(signature, &mac_hs512(signing_input, secret)?)
    }
}

fn mac_hs256(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).map_err(|e| Error::KeyInvalid(e.to_string()))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn mac_hs384(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        Hmac::<Sha384>::new_from_slice(secret).map_err(|e| Error::KeyInvalid(e.to_string()))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn mac_hs512(signing_input: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac =
        Hmac::<Sha512>::new_from_slice(secret).map_err(|e| Error::KeyInvalid(e.to_string()))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time comparison of provided and expected MACs
fn compare(provided: &[u8], expected: &[u8]) -> Result<()> {
    if provided.len() != expected.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(provided, expected) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}
