use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::Value;

use crate::error::{CommsErr, Result};

const WHAT: &str = "token";

/// A decoded `header.claims.signature` token.
///
/// The signature is never verified: the contents are only meant to be logged.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub header: Value,
    pub claims: Value,
}

impl Token {
    /// Decodes a compact token.
    ///
    /// # Arguments
    /// * `raw` - The token bytes, surrounding whitespace allowed.
    ///
    /// # Returns
    /// The header and claims, or an error if the structure or encoding is wrong.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let raw = std::str::from_utf8(raw).map_err(|e| CommsErr::malformed(WHAT, e))?;
        let mut parts = raw.trim().split('.');

        let (Some(header), Some(claims), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CommsErr::malformed(WHAT, "expected three dot separated segments"));
        };

        Ok(Self {
            header: decode_segment(header)?,
            claims: decode_segment(claims)?,
        })
    }
}

fn decode_segment(segment: &str) -> Result<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| CommsErr::malformed(WHAT, e))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn encode(value: &Value) -> String {
        URL_SAFE_NO_PAD.encode(value.to_string())
    }

    #[test]
    fn decodes_without_checking_signature() {
        let header = json!({"alg": "HS256", "typ": "JWT"});
        let claims = json!({"sub": "abc", "score": 1000});
        let raw = format!("{}.{}.not-a-real-signature\n", encode(&header), encode(&claims));

        let token = Token::decode(raw.as_bytes()).unwrap();

        assert_eq!(token.header, header);
        assert_eq!(token.claims, claims);
    }

    #[test]
    fn padded_segments_are_accepted() {
        let header = json!({"alg": "none"});
        let claims = json!({"a": 1});
        let raw = format!("{}==.{}=.", encode(&header), encode(&claims));

        let token = Token::decode(raw.as_bytes()).unwrap();
        assert_eq!(token.claims, claims);
    }

    #[test]
    fn wrong_segment_count_is_rejected() {
        assert!(matches!(
            Token::decode(b"only.two"),
            Err(CommsErr::MalformedPayload { what: "token", .. })
        ));
        assert!(Token::decode(b"a.b.c.d").is_err());
    }

    #[test]
    fn non_json_claims_are_rejected() {
        let raw = format!("{}.{}.sig", encode(&json!({})), URL_SAFE_NO_PAD.encode("nope"));
        assert!(matches!(Token::decode(raw.as_bytes()), Err(CommsErr::Json(_))));
    }
}
