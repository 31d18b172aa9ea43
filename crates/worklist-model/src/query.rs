//! Query configuration: filters, columns, grouping, and pagination overrides.

use serde::{Deserialize, Serialize};

use crate::ids::{ColumnId, QueryId};

/// A single filter criterion.
///
/// Deactivated filters stay in the list (the user can re-enable them) but are
/// excluded from the active filter count and from any fetch the backend runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub attribute: String,
    pub operator: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub deactivated: bool,
}

impl Filter {
    pub fn new(attribute: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: operator.into(),
            values: Vec::new(),
            deactivated: false,
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn deactivated(mut self) -> Self {
        self.deactivated = true;
        self
    }
}

/// The serialized shape of a query, as carried by a URL token or returned in
/// the `query` slot of response metadata. No identity, no dirty flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub columns: Vec<ColumnId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

/// The complete configuration of one list view instance.
///
/// Column order is exactly the render order; nothing downstream may reorder
/// it. `dirty` tracks divergence from the last loaded/persisted baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Absent for unsaved/transient queries.
    pub id: Option<QueryId>,
    pub name: Option<String>,
    pub filters: Vec<Filter>,
    pub columns: Vec<ColumnId>,
    pub group_by: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub dirty: bool,
    /// Opaque passthrough of server-declared export representations.
    pub export_formats: Vec<String>,
}

impl Query {
    /// Build a fresh query from server-returned metadata.
    pub fn from_server_meta(
        id: Option<QueryId>,
        data: QueryData,
        columns: Vec<ColumnId>,
        export_formats: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: data.name,
            filters: data.filters,
            columns,
            group_by: data.group_by,
            page: data.page,
            per_page: data.per_page,
            dirty: false,
            export_formats,
        }
    }

    /// Build a query from a decoded URL token.
    ///
    /// Filters are taken verbatim from the token, without re-validation
    /// against server filter definitions. The result necessarily diverges
    /// from any persisted form, so it starts dirty.
    pub fn from_token_data(id: Option<QueryId>, data: QueryData) -> Self {
        Self {
            id,
            name: data.name,
            filters: data.filters,
            columns: data.columns,
            group_by: data.group_by,
            page: data.page,
            per_page: data.per_page,
            dirty: true,
            export_formats: Vec::new(),
        }
    }

    /// Project this query into its token/persistence shape.
    pub fn to_data(&self) -> QueryData {
        QueryData {
            name: self.name.clone(),
            filters: self.filters.clone(),
            columns: self.columns.clone(),
            group_by: self.group_by.clone(),
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// Refresh server-authoritative metadata on a cached query while
    /// preserving in-progress local edits.
    ///
    /// Column definitions come from the latest response; filters, grouping,
    /// pagination overrides, and the dirty flag are all left untouched.
    pub fn merge_server_meta(
        &mut self,
        data: &QueryData,
        columns: Vec<ColumnId>,
        export_formats: Vec<String>,
    ) {
        self.columns = columns;
        self.export_formats = export_formats;
        if self.name.is_none() {
            self.name = data.name.clone();
        }
    }

    /// Number of filters the user has not deactivated.
    pub fn active_filter_count(&self) -> usize {
        self.filters.iter().filter(|f| !f.deactivated).count()
    }
}
