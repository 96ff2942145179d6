use crate::error::{Error, Result, Segment};
use crate::limits::{MAX_SIGNATURE_B64_SIZE, MAX_TOKEN_LENGTH};

/// A compact token split into its three Base64URL segments
///
/// Borrows from the input string; nothing is decoded at this stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    header_b64: &'a str,
    payload_b64: &'a str,
    signature_b64: &'a str,
}

impl<'a> RawToken<'a> {
    /// Split `token` on `.` into exactly three segments
    ///
    /// Oversized tokens are rejected before splitting. Any other segment count
    /// yields [`Error::FormatInvalid`].
    pub fn split(token: &'a str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::FormatInvalid);
        };

        Ok(Self {
            header_b64,
            payload_b64,
            signature_b64,
        })
    }

    pub fn header(&self) -> &'a str {
        self.header_b64
    }

    pub fn payload(&self) -> &'a str {
        self.payload_b64
    }

    pub fn signature(&self) -> &'a str {
        self.signature_b64
    }

    /// The bytes covered by the signature (`header.payload`)
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header_b64, self.payload_b64)
    }

    /// Reject an encoded signature segment above the size limit
    pub(crate) fn check_signature_size(&self) -> Result<()> {
        if self.signature_b64.len() > MAX_SIGNATURE_B64_SIZE {
            return Err(Error::SegmentTooLarge {
                segment: Segment::Signature,
                size: self.signature_b64.len(),
                max: MAX_SIGNATURE_B64_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_three_segments() {
        let raw = RawToken::split("aaa.bbb.ccc").unwrap();
        assert_eq!(raw.header(), "aaa");
        assert_eq!(raw.payload(), "bbb");
        assert_eq!(raw.signature(), "ccc");
        assert_eq!(raw.signing_input(), "aaa.bbb");
    }

    #[test]
    fn test_wrong_segment_count() {
        for token in ["", "a", "a.b", "a.b.c.d", "....", "a.b.c."] {
            assert_eq!(
                RawToken::split(token),
                Err(Error::FormatInvalid),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_empty_segments_still_split() {
        let raw = RawToken::split("..").unwrap();
        assert_eq!(raw.header(), "");
        assert_eq!(raw.signature(), "");
    }

    #[test]
    fn test_token_too_large() {
        let token = format!("{}.b.c", "a".repeat(MAX_TOKEN_LENGTH));
        assert!(matches!(
            RawToken::split(&token),
            Err(Error::TokenTooLarge { .. })
        ));
    }

    #[test]
    fn test_signature_size_limit() {
        let token = format!("a.b.{}", "s".repeat(MAX_SIGNATURE_B64_SIZE + 1));
        let raw = RawToken::split(&token).unwrap();
        assert!(matches!(
            raw.check_signature_size(),
            Err(Error::SegmentTooLarge {
                segment: Segment::Signature,
                ..
            })
        ));
    }
}
