//! Entry-state resolution: which source of truth materializes the query.
//!
//! Evaluated in strict precedence order: a URL token beats a saved-query id,
//! which beats the server default. Decode failures fall back to the default
//! fetch after recovery; the decision is returned as a value so the
//! orchestrator can branch explicitly instead of catching faults.

use worklist_codec::{DecodeError, decode_query};
use worklist_model::{Query, QueryId};

use crate::url_state::UrlState;

/// Outcome of evaluating the entry conditions against the current URL.
#[derive(Debug)]
pub enum Resolution {
    /// A token decoded cleanly; the query is built verbatim from it and its
    /// pagination overrides must be applied before the fetch.
    FromToken(Query),
    /// No token, but a saved query id to fetch by.
    FromSavedQuery(QueryId),
    /// Neither source present; clear any cached query and fetch the default.
    Default,
    /// A token was present but unrecoverable. The caller notifies the user,
    /// clears both URL parameters, and issues the default fetch.
    TokenUnrecoverable(DecodeError),
}

pub fn resolve_entry(url: &UrlState) -> Resolution {
    if let Some(token) = url.query_props() {
        return match decode_query(url.query_id().cloned(), token) {
            Ok(decoded) => Resolution::FromToken(Query::from_token_data(decoded.id, decoded.data)),
            Err(err) => Resolution::TokenUnrecoverable(err),
        };
    }
    if let Some(id) = url.query_id() {
        return Resolution::FromSavedQuery(id.clone());
    }
    Resolution::Default
}

/// Whether server metadata should be merged into the cached query instead of
/// reinitializing it: only when a cached query exists, the navigation state
/// carries an id, and the two ids agree.
pub fn should_merge(cached: Option<&Query>, navigation_id: Option<&QueryId>) -> bool {
    match (cached, navigation_id) {
        (Some(query), Some(id)) => query.id.as_ref() == Some(id),
        _ => false,
    }
}
