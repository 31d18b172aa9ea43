//! Page position holder, independent of query content but mutated by it.

use worklist_model::{PaginationOptions, PaginationState, Query, ResponseMeta};

/// Holds the current page, page size, and the server-declared size options.
///
/// Token-carried overrides are applied before the fetch they belong to and
/// take precedence over whatever the coordinator held; server metadata is
/// copied verbatim after each fetch.
#[derive(Debug, Clone, Default)]
pub struct PaginationCoordinator {
    state: PaginationState,
}

impl PaginationCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn set_page(&mut self, page: u32) {
        self.state.page = page;
    }

    pub fn set_per_page(&mut self, per_page: u32) {
        self.state.per_page = per_page;
    }

    pub fn set_per_page_options(&mut self, options: Vec<u32>) {
        self.state.per_page_options = options;
    }

    /// The slice of state the next fetch request carries.
    pub fn pagination_options(&self) -> PaginationOptions {
        PaginationOptions {
            page: self.state.page,
            per_page: self.state.per_page,
        }
    }

    /// Apply pagination overrides a decoded query carries. Must run before
    /// the fetch that uses them.
    pub fn apply_query_overrides(&mut self, query: &Query) {
        if let Some(page) = query.page {
            self.state.page = page;
        }
        if let Some(per_page) = query.per_page {
            self.state.per_page = per_page;
        }
    }

    /// Copy the server-declared position verbatim from response metadata.
    pub fn apply_meta(&mut self, meta: &ResponseMeta) {
        self.state.per_page_options = meta.per_page_options.clone();
        self.state.per_page = meta.per_page;
        self.state.page = meta.page;
    }
}

#[cfg(test)]
mod tests {
    use worklist_model::QueryData;

    use super::*;

    #[test]
    fn query_overrides_take_precedence() {
        let mut coordinator = PaginationCoordinator::new();
        coordinator.set_page(4);
        coordinator.set_per_page(100);

        let query = Query::from_token_data(
            None,
            QueryData {
                page: Some(2),
                ..QueryData::default()
            },
        );
        coordinator.apply_query_overrides(&query);

        let options = coordinator.pagination_options();
        assert_eq!(options.page, 2);
        // No per_page override in the token; the held value stays.
        assert_eq!(options.per_page, 100);
    }

    #[test]
    fn meta_is_copied_verbatim() {
        let mut coordinator = PaginationCoordinator::new();
        let meta = ResponseMeta {
            page: 3,
            per_page: 25,
            per_page_options: vec![25, 50, 100],
            ..ResponseMeta::default()
        };
        coordinator.apply_meta(&meta);
        assert_eq!(coordinator.state().page, 3);
        assert_eq!(coordinator.state().per_page, 25);
        assert_eq!(coordinator.state().per_page_options, vec![25, 50, 100]);
    }
}
