mod traits;

pub mod hmac;

pub use traits::{get_algorithm, Algorithm, SigningAlgorithm};

use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;

/// Algorithm identifier from JWT header
///
/// Only the HMAC family is supported; every other `alg` value is rejected
/// when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,
}

impl AlgorithmId {
    /// All supported algorithms, strongest hash last
    pub const ALL: [AlgorithmId; 3] = [AlgorithmId::HS256, AlgorithmId::HS384, AlgorithmId::HS512];

    /// Parse algorithm string from JWT header
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        if s.len() > MAX_ALG_LENGTH {
            let prefix: String = s.chars().take(MAX_ALG_LENGTH).collect();
            return Err(Error::UnsupportedAlgorithm(format!(
                "{prefix}... ({} bytes)",
                s.len()
            )));
        }

        match s {
            "none" => Err(Error::NoneAlgorithmRejected),

            "HS256" => Ok(AlgorithmId::HS256),
            "HS384" => Ok(AlgorithmId::HS384),
            "HS512" => Ok(AlgorithmId::HS512),

            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }

    /// Resolve the algorithm requested for issuance
    ///
    /// An absent or empty tag selects HS256. Anything outside the HMAC family,
    /// including `none`, is reported as unsupported.
    pub fn for_signing(requested: Option<&str>) -> Result<Self> {
        match requested {
            None | Some("") => Ok(AlgorithmId::HS256),
            Some(tag) => {
                Self::from_str(tag).map_err(|_| Error::UnsupportedAlgorithm(tag.to_string()))
            }
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",
        }
    }

    /// Length of the raw MAC in bytes
    pub const fn signature_len(&self) -> usize {
        match self {
            AlgorithmId::HS256 => 32,
            AlgorithmId::HS384 => 48,
            AlgorithmId::HS512 => 64,
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Policy for allowed algorithms
#[derive(Debug, Clone)]
pub struct AlgorithmPolicy {
    allowed: Vec<AlgorithmId>,
}

impl AlgorithmPolicy {
    /// Create a policy that allows only specific algorithms
    pub fn allow_only(algorithms: Vec<AlgorithmId>) -> Self {
        Self {
            allowed: algorithms,
        }
    }

    /// Policy that allows only HS256
    pub fn hs256_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS256])
    }

    /// Policy that allows only HS384
    pub fn hs384_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS384])
    }

    /// Policy that allows only HS512
    pub fn hs512_only() -> Self {
        Self::allow_only(vec![AlgorithmId::HS512])
    }

    /// Policy that allows any HMAC algorithm (HS256, HS384, HS512)
    ///
    /// Equivalent to `Default::default()`.
    pub fn hmac_any() -> Self {
        Self::allow_only(AlgorithmId::ALL.to_vec())
    }

    /// Check if an algorithm is allowed
    pub fn is_allowed(&self, algorithm: &AlgorithmId) -> bool {
        self.allowed.contains(algorithm)
    }

    /// Validate algorithm against policy
    pub fn validate(&self, algorithm: &AlgorithmId) -> Result<()> {
        if self.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(Error::AlgorithmNotAllowed {
                found: algorithm.to_string(),
                allowed: self.allowed.iter().map(ToString::to_string).collect(),
            })
        }
    }

    /// Get list of allowed algorithms
    pub fn allowed_algorithms(&self) -> &[AlgorithmId] {
        &self.allowed
    }
}

impl Default for AlgorithmPolicy {
    fn default() -> Self {
        Self::hmac_any()
    }
}
