//! Explicit model of the two URL query parameters the view owns.
//!
//! `query_props` carries the encoded token; `query_id` carries the saved
//! query identifier. They are only ever cleared together: a token without a
//! matching id, or vice versa, must not persist after a decode failure or an
//! explicit clear.

use worklist_model::QueryId;

#[derive(Debug, Clone, Default)]
pub struct UrlState {
    path: String,
    query_props: Option<String>,
    query_id: Option<QueryId>,
}

impl UrlState {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query_props: None,
            query_id: None,
        }
    }

    pub fn query_props(&self) -> Option<&str> {
        self.query_props.as_deref()
    }

    pub fn set_query_props(&mut self, token: impl Into<String>) {
        self.query_props = Some(token.into());
    }

    pub fn query_id(&self) -> Option<&QueryId> {
        self.query_id.as_ref()
    }

    pub fn set_query_id(&mut self, id: QueryId) {
        self.query_id = Some(id);
    }

    /// Clear both parameters. There is deliberately no way to clear one
    /// without the other.
    pub fn clear_query_params(&mut self) {
        self.query_props = None;
        self.query_id = None;
    }

    /// Render the current location, used as the "back" reference.
    pub fn url(&self) -> String {
        let mut params = Vec::new();
        if let Some(id) = &self.query_id {
            params.push(format!("query_id={id}"));
        }
        if let Some(token) = &self.query_props {
            params.push(format!("query_props={token}"));
        }
        if params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_cleared_together() {
        let mut url = UrlState::new("/projects/acme/work_packages");
        url.set_query_id(QueryId::new("5").unwrap());
        url.set_query_props("abc");
        url.clear_query_params();
        assert!(url.query_props().is_none());
        assert!(url.query_id().is_none());
        assert_eq!(url.url(), "/projects/acme/work_packages");
    }

    #[test]
    fn url_renders_both_params() {
        let mut url = UrlState::new("/work_packages");
        url.set_query_id(QueryId::new("9").unwrap());
        url.set_query_props("tok");
        assert_eq!(url.url(), "/work_packages?query_id=9&query_props=tok");
    }
}
