//! Opaque query token codec.
//!
//! The grid sends its [`QueryState`] as a single `query` parameter holding the
//! base64 encoding of the state's JSON text.

use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use thiserror::Error;

use crate::domain::query_state::QueryState;

/// Standard alphabet with optional padding, as produced by `btoa`.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// URL-safe alphabet with optional padding.
const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("query token is missing")]
    Missing,

    #[error("query token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("query token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("query token does not hold a valid query state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes a token into a [`QueryState`].
///
/// Spaces are read back as `+`, since an unescaped `+` in a query string
/// arrives as a space after form decoding.
pub fn decode_query_state(token: &str) -> Result<QueryState, TokenError> {
    let token = token.trim().replace(' ', "+");
    if token.is_empty() {
        return Err(TokenError::Missing);
    }

    let bytes = match LENIENT_STANDARD.decode(&token) {
        Ok(bytes) => bytes,
        Err(err) => LENIENT_URL_SAFE.decode(&token).map_err(|_| err)?,
    };
    let text = String::from_utf8(bytes)?;
    let state = serde_json::from_str(&text)?;
    Ok(state)
}

/// Encodes a [`QueryState`] into the token the grid would send.
pub fn encode_query_state(state: &QueryState) -> Result<String, TokenError> {
    let text = serde_json::to_string(state)?;
    Ok(STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query_state::{FilterEntry, OrderDirection};

    #[test]
    fn decodes_btoa_output() {
        // btoa('{"query":"ann","page":1,"pageSize":10}')
        let token = "eyJxdWVyeSI6ImFubiIsInBhZ2UiOjEsInBhZ2VTaXplIjoxMH0=";

        let state = decode_query_state(token).unwrap();

        assert_eq!(state, QueryState::new(1, 10).search("ann"));
    }

    #[test]
    fn accepts_missing_padding() {
        let token = "eyJxdWVyeSI6ImFubiIsInBhZ2UiOjEsInBhZ2VTaXplIjoxMH0";

        assert!(decode_query_state(token).is_ok());
    }

    #[test]
    fn restores_plus_signs_lost_in_query_strings() {
        let state = QueryState::new(1, 10).search("a>b");
        let token = encode_query_state(&state).unwrap();
        assert!(token.contains('+'));

        let mangled = token.replace('+', " ");

        assert_eq!(decode_query_state(&mangled).unwrap(), state);
    }

    #[test]
    fn encode_then_decode_preserves_state() {
        let state = QueryState::new(3, 25)
            .search("bret")
            .filter(FilterEntry::positions(["Manager", "Engineer"]))
            .order_by("email", OrderDirection::Desc);

        let token = encode_query_state(&state).unwrap();

        assert_eq!(decode_query_state(&token).unwrap(), state);
    }

    #[test]
    fn rejects_non_base64() {
        assert!(decode_query_state("not-base64-json").is_err());
    }

    #[test]
    fn rejects_base64_of_non_json() {
        let token = STANDARD.encode("hello world");

        assert!(matches!(
            decode_query_state(&token),
            Err(TokenError::Json(_))
        ));
    }

    #[test]
    fn rejects_wrong_structure() {
        let token = STANDARD.encode(r#"{"query":"ann"}"#);

        assert!(matches!(
            decode_query_state(&token),
            Err(TokenError::Json(_))
        ));
    }

    #[test]
    fn accepts_url_safe_alphabet() {
        // URL-safe encoding of {"query":"a>b?","orderDirection":"asc","page":1,"pageSize":10}
        let token = "eyJxdWVyeSI6ImE-Yj8iLCJvcmRlckRpcmVjdGlvbiI6ImFzYyIsInBhZ2UiOjEsInBhZ2VTaXplIjoxMH0=";

        let state = decode_query_state(token).unwrap();

        assert_eq!(state.search_term(), Some("a>b?"));
        assert_eq!(state, QueryState::new(1, 10).search("a>b?"));
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let token = STANDARD.encode([0xff, 0xfe, 0xfd]);

        assert!(matches!(
            decode_query_state(&token),
            Err(TokenError::Utf8(_))
        ));
    }

    #[test]
    fn rejects_blank_token() {
        assert!(matches!(decode_query_state("  "), Err(TokenError::Missing)));
    }
}
