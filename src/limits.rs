//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded JWT header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded JWT payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for the Base64URL-encoded signature segment (1.5KB)
/// HS512 produces 64 bytes, which encode to 86 characters
pub(crate) const MAX_SIGNATURE_B64_SIZE: usize = 1536;

/// Maximum length for the algorithm (alg) header field (16 bytes)
pub(crate) const MAX_ALG_LENGTH: usize = 16;

/// Maximum leeway applied to exp/nbf checks (300 seconds = 5 minutes)
/// Larger values would effectively disable expiration checks
pub(crate) const MAX_LEEWAY_SECONDS: u64 = 300;
