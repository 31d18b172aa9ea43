//! Lossless codec between a query configuration and a URL-safe token.
//!
//! Encoding is pure and side-effect free. Decoding validates the structural
//! shape and fails with [`DecodeError`] on malformed, truncated, or foreign
//! input; it never silently substitutes defaults.

#![deny(unsafe_code)]

pub mod error;
mod token;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use worklist_model::{QueryData, QueryId};

pub use error::DecodeError;

use token::TokenPayload;

/// A token decoded back into query shape, tagged with the navigation id the
/// URL carried alongside it (if any).
#[derive(Debug)]
pub struct DecodedQuery {
    pub id: Option<QueryId>,
    pub data: QueryData,
}

/// Serialize a query snapshot into a single URL-safe token.
pub fn encode_query(data: &QueryData) -> String {
    let payload = TokenPayload::from(data);
    // A QueryData projection has no non-serializable content.
    let json = serde_json::to_vec(&payload).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a URL token back into query shape.
///
/// `id` is the separate query-id URL parameter, attached verbatim so the
/// resolver can match the result against a cached query.
pub fn decode_query(id: Option<QueryId>, token: &str) -> Result<DecodedQuery, DecodeError> {
    if token.trim().is_empty() {
        return Err(DecodeError::Empty);
    }
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let json = String::from_utf8(bytes)?;
    let payload: TokenPayload = serde_json::from_str(&json)?;
    Ok(DecodedQuery {
        id,
        data: payload.into(),
    })
}

#[cfg(test)]
mod tests {
    use worklist_model::{ColumnId, Filter};

    use super::*;

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(decode_query(None, "  "), Err(DecodeError::Empty)));
    }

    #[test]
    fn foreign_payload_is_rejected() {
        // Valid base64, but the payload is not a query.
        let token = URL_SAFE_NO_PAD.encode(br#"{"unknown_key": 1}"#);
        assert!(matches!(
            decode_query(None, &token),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn deactivated_filters_survive_the_trip() {
        let data = QueryData {
            filters: vec![Filter::new("status", "=").deactivated()],
            columns: vec![ColumnId::new("subject").unwrap()],
            ..QueryData::default()
        };
        let decoded = decode_query(None, &encode_query(&data)).unwrap();
        assert!(decoded.data.filters[0].deactivated);
    }
}
