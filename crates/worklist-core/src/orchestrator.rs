//! Top-level load sequencing and reactive refresh.
//!
//! The orchestrator owns the single current-query handle and the derived
//! state around it. Derived state (table, pagination, authorization) is
//! replaced wholesale on each fetch completion; the query object is the only
//! piece mutated in place, since the caller may edit filters and columns
//! between fetches.

use tracing::{debug, info, warn};

use worklist_codec::encode_query;
use worklist_model::{
    ColumnDescriptor, ColumnId, ListResponse, PaginationState, ProjectInfo, Query, QueryId,
    ResponseMeta, SavedQueryRef, ServiceError, TableState, WorkPackageId,
};
use worklist_table::build_table;

use crate::authorization::AuthorizationState;
use crate::events::Event;
use crate::pagination::PaginationCoordinator;
use crate::resolver::{Resolution, resolve_entry, should_merge};
use crate::services::{NotificationSink, ProjectService, WorkPackageService};
use crate::session::SessionCache;
use crate::url_state::UrlState;

/// User-visible message when a URL token cannot be decoded.
pub const UNRETRIEVABLE_QUERY_MESSAGE: &str = "The query could not be restored from the URL.";

pub struct Orchestrator {
    work_packages: Box<dyn WorkPackageService>,
    projects: Box<dyn ProjectService>,
    notifications: Box<dyn NotificationSink>,
    project: Option<String>,
    url: UrlState,
    session: SessionCache,

    query: Option<Query>,
    table: TableState,
    pagination: PaginationCoordinator,
    authorization: AuthorizationState,
    back_url: Option<String>,

    project_info: Option<ProjectInfo>,
    available_columns: Vec<ColumnDescriptor>,
    saved_queries: Vec<SavedQueryRef>,

    loading: u32,
    // Stale-response guard: fetches are numbered, and a completion older
    // than the last applied one is discarded.
    next_fetch_seq: u64,
    applied_seq: u64,
}

impl Orchestrator {
    pub fn new(
        work_packages: Box<dyn WorkPackageService>,
        projects: Box<dyn ProjectService>,
        notifications: Box<dyn NotificationSink>,
        project: Option<String>,
        url: UrlState,
        session: SessionCache,
    ) -> Self {
        Self {
            work_packages,
            projects,
            notifications,
            project,
            url,
            session,
            query: None,
            table: TableState::default(),
            pagination: PaginationCoordinator::new(),
            authorization: AuthorizationState::new(),
            back_url: None,
            project_info: None,
            available_columns: Vec::new(),
            saved_queries: Vec::new(),
            loading: 0,
            next_fetch_seq: 0,
            applied_seq: 0,
        }
    }

    /// Run the full load sequence: resolve the authoritative state source,
    /// fetch, and rebuild all derived state. Secondary fetches (available
    /// columns, project metadata) run afterwards and cannot abort the
    /// primary render.
    pub fn initial_load(&mut self) -> Result<(), ServiceError> {
        self.loading += 1;
        let result = self.run_initial_load();
        self.loading -= 1;
        result
    }

    fn run_initial_load(&mut self) -> Result<(), ServiceError> {
        let seq = self.next_seq();
        let (response, from_token) = self.resolve_and_fetch()?;

        if !self.try_apply(seq) {
            return Ok(());
        }
        self.init_query(&response.meta, from_token);
        self.maintain_back_url();
        self.apply_response(&response);

        // Fresh (non-refresh) loads preselect the first row as the later
        // navigation target.
        if let Some(first) = response.work_packages.first() {
            self.session.set_preselected_work_package(first.id);
        }

        info!(
            total = response.meta.total_entries,
            rows = response.work_packages.len(),
            "list loaded"
        );
        self.fetch_secondary();
        Ok(())
    }

    fn resolve_and_fetch(&mut self) -> Result<(ListResponse, bool), ServiceError> {
        match resolve_entry(&self.url) {
            Resolution::FromToken(query) => {
                debug!("resolving from url token");
                // Token-carried pagination overrides win over previous
                // coordinator state and apply before the fetch.
                self.pagination.apply_query_overrides(&query);
                let response = self.work_packages.with_query(
                    self.project.as_deref(),
                    &query,
                    &self.pagination.pagination_options(),
                )?;
                Ok((response, true))
            }
            Resolution::TokenUnrecoverable(err) => {
                warn!(error = %err, "query token unrecoverable, falling back to default");
                self.notifications.error(UNRETRIEVABLE_QUERY_MESSAGE);
                self.url.clear_query_params();
                let response = self.work_packages.default_list(self.project.as_deref())?;
                Ok((response, false))
            }
            Resolution::FromSavedQuery(id) => {
                debug!(query_id = %id, "resolving from saved query id");
                let response = self
                    .work_packages
                    .by_query_id(self.project.as_deref(), &id)?;
                Ok((response, false))
            }
            Resolution::Default => {
                debug!("resolving to project default");
                self.query = None;
                let response = self.work_packages.default_list(self.project.as_deref())?;
                Ok((response, false))
            }
        }
    }

    /// Materialize the current query from response metadata: merge into the
    /// cached query when the navigation id matches it, reinitialize fresh
    /// otherwise. Token-origin queries end up dirty on either path.
    fn init_query(&mut self, meta: &ResponseMeta, from_token: bool) {
        let columns: Vec<ColumnId> = meta.columns.iter().map(|d| d.id.clone()).collect();
        let navigation_id = self.url.query_id().cloned();

        if should_merge(self.query.as_ref(), navigation_id.as_ref()) {
            if let Some(query) = self.query.as_mut() {
                query.merge_server_meta(&meta.query, columns, meta.export_formats.clone());
            }
        } else {
            self.query = Some(Query::from_server_meta(
                navigation_id,
                meta.query.clone(),
                columns,
                meta.export_formats.clone(),
            ));
        }

        if from_token {
            if let Some(query) = self.query.as_mut() {
                query.dirty = true;
            }
        }
    }

    /// Replace all fetch-derived state from one response.
    fn apply_response(&mut self, response: &ListResponse) {
        if let Some(query) = &self.query {
            self.table = build_table(query, response);
        }
        self.pagination.apply_meta(&response.meta);
        self.authorization.reset();
        self.authorization
            .init_model_auth("work_package", &response.meta.links);
        self.authorization
            .init_model_auth("query", &response.meta.query_links);
    }

    /// Re-fetch with the current query and rebuild derived state, without
    /// re-running resolution and without touching the preselection cache.
    fn update_results(&mut self) -> Result<(), ServiceError> {
        let Some(query) = self.query.clone() else {
            return Ok(());
        };
        self.loading += 1;
        let seq = self.next_seq();
        let result = self.work_packages.with_query(
            self.project.as_deref(),
            &query,
            &self.pagination.pagination_options(),
        );
        self.loading -= 1;
        let response = result?;
        if self.try_apply(seq) {
            self.apply_response(&response);
        }
        Ok(())
    }

    /// Two independent side fetches that never gate the primary render.
    fn fetch_secondary(&mut self) {
        match self.work_packages.available_columns(self.project.as_deref()) {
            Ok(columns) => self.available_columns = columns,
            Err(err) => warn!(error = %err, "available-columns fetch failed, keeping previous set"),
        }
        let Some(project) = self.project.clone() else {
            return;
        };
        match self.projects.project(&project) {
            Ok(info) => self.project_info = Some(info),
            Err(err) => warn!(error = %err, "project metadata fetch failed"),
        }
        match self.projects.project_queries(&project) {
            Ok(queries) => self.saved_queries = queries,
            Err(err) => warn!(error = %err, "project queries fetch failed"),
        }
    }

    /// Single dispatch point for reactive signals.
    pub fn handle_event(&mut self, event: Event) -> Result<(), ServiceError> {
        match event {
            Event::FiltersChanged | Event::RefreshRequired => self.update_results(),
            Event::QueryCleared => {
                let had_id = self.url.query_id().is_some();
                self.url.clear_query_params();
                if had_id {
                    // Navigation to the bare list state follows; the next
                    // entry re-resolves from scratch.
                    Ok(())
                } else {
                    self.initial_load()
                }
            }
            Event::QueryStateChanged => {
                self.maintain_url_query_state();
                self.maintain_back_url();
                Ok(())
            }
            Event::WorkPackageLoaded => {
                self.maintain_back_url();
                Ok(())
            }
        }
    }

    /// Mirror the current query into the URL token parameter.
    pub fn maintain_url_query_state(&mut self) {
        if let Some(query) = &self.query {
            let token = encode_query(&query.to_data());
            self.url.set_query_props(token);
        }
    }

    /// Snapshot the current location as the "back" reference.
    pub fn maintain_back_url(&mut self) {
        self.back_url = Some(self.url.url());
    }

    /// Navigate to a saved query, discarding unsaved changes to the current
    /// one.
    pub fn load_query(&mut self, id: QueryId) -> Result<(), ServiceError> {
        self.url.clear_query_params();
        self.url.set_query_id(id);
        self.initial_load()
    }

    /// The navigation target when no item is explicitly selected: the cached
    /// preselected id, falling back to the first current data row.
    pub fn next_available_work_package(&self) -> Option<WorkPackageId> {
        self.session
            .preselected_work_package()
            .or_else(|| self.table.first_item_id())
    }

    pub fn active_filter_count(&self) -> usize {
        self.query
            .as_ref()
            .map_or(0, Query::active_filter_count)
    }

    fn next_seq(&mut self) -> u64 {
        self.next_fetch_seq += 1;
        self.next_fetch_seq
    }

    /// Returns false when a newer fetch already applied, in which case this
    /// completion is stale and must be dropped.
    fn try_apply(&mut self, seq: u64) -> bool {
        if seq < self.applied_seq {
            warn!(seq, applied = self.applied_seq, "discarding stale fetch completion");
            return false;
        }
        self.applied_seq = seq;
        true
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Mutable access for in-place edits (filters, columns) between fetches.
    pub fn query_mut(&mut self) -> Option<&mut Query> {
        self.query.as_mut()
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn pagination(&self) -> &PaginationState {
        self.pagination.state()
    }

    pub fn pagination_mut(&mut self) -> &mut PaginationCoordinator {
        &mut self.pagination
    }

    pub fn authorization(&self) -> &AuthorizationState {
        &self.authorization
    }

    pub fn url(&self) -> &UrlState {
        &self.url
    }

    pub fn back_url(&self) -> Option<&str> {
        self.back_url.as_deref()
    }

    pub fn project_info(&self) -> Option<&ProjectInfo> {
        self.project_info.as_ref()
    }

    pub fn available_columns(&self) -> &[ColumnDescriptor] {
        &self.available_columns
    }

    pub fn saved_queries(&self) -> &[SavedQueryRef] {
        &self.saved_queries
    }

    pub fn session(&self) -> &SessionCache {
        &self.session
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }
}
