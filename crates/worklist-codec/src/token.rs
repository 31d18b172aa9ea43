//! Wire shape of the URL token.
//!
//! The payload is a compact JSON projection of the query with single-letter
//! keys, then url-safe base64 without padding so the whole token can sit in
//! one query parameter. Unknown keys are rejected: a token produced by a
//! different schema must fail decode rather than half-load.

use serde::{Deserialize, Serialize};

use worklist_model::{ColumnId, Filter, QueryData};

#[derive(Debug, Serialize, Deserialize)]
struct TokenFilter {
    a: String,
    o: String,
    #[serde(default)]
    v: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    d: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TokenPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<String>,
    #[serde(default)]
    f: Vec<TokenFilter>,
    #[serde(default)]
    c: Vec<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    g: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    p: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pp: Option<u32>,
}

impl From<&QueryData> for TokenPayload {
    fn from(data: &QueryData) -> Self {
        Self {
            n: data.name.clone(),
            f: data
                .filters
                .iter()
                .map(|f| TokenFilter {
                    a: f.attribute.clone(),
                    o: f.operator.clone(),
                    v: f.values.clone(),
                    d: f.deactivated,
                })
                .collect(),
            c: data.columns.clone(),
            g: data.group_by.clone(),
            p: data.page,
            pp: data.per_page,
        }
    }
}

impl From<TokenPayload> for QueryData {
    fn from(payload: TokenPayload) -> Self {
        Self {
            name: payload.n,
            filters: payload
                .f
                .into_iter()
                .map(|f| Filter {
                    attribute: f.a,
                    operator: f.o,
                    values: f.v,
                    deactivated: f.d,
                })
                .collect(),
            columns: payload.c,
            group_by: payload.g,
            page: payload.p,
            per_page: payload.pp,
        }
    }
}
