//! Compact token handling
//!
//! [`RawToken`] splits a compact token into its three encoded segments,
//! [`decode`] turns those segments into claim sets without any
//! cryptographic work, and [`encode`] issues a freshly signed token.

mod decoded;
mod encoder;
mod header;
mod raw;

pub use decoded::{decode, DecodedToken};
pub(crate) use decoded::decode_claims;
pub use encoder::encode;
pub use header::TokenHeader;
pub use raw::RawToken;
