//! Access Token Decoding
//!
//! Structural decode of the JWT payload segment. The server signs and
//! verifies tokens; the client only needs the claims to derive the role,
//! so no signature or expiry validation happens here.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

/// Claims carried in the token payload (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("token is not a three-segment JWT")]
    Malformed,
    #[error("token payload is not valid claims JSON")]
    Payload,
}

/// Decode the payload segment of a JWT into [`Claims`].
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenError::Malformed),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Payload)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an unsigned token with the given payload JSON.
    fn token_with_payload(json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(json);
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decodes_role_claim() {
        let token = token_with_payload(r#"{"sub":"alice","role":"admin","exp":1700000000}"#);
        let claims = decode_claims(&token).expect("should decode");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.exp, Some(1700000000));
    }

    #[test]
    fn missing_exp_is_tolerated() {
        let token = token_with_payload(r#"{"sub":"bob","role":"customer"}"#);
        let claims = decode_claims(&token).expect("should decode");
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert_eq!(decode_claims("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
    }

    #[test]
    fn rejects_garbage_payload() {
        assert_eq!(decode_claims("aaa.!!!.ccc"), Err(TokenError::Payload));
        let token = token_with_payload(r#"{"sub":"no role here"}"#);
        assert_eq!(decode_claims(&token), Err(TokenError::Payload));
    }
}
