//! Shapes received from the external list and project services.
//!
//! A [`ListResponse`] is treated as an immutable input per fetch; derived
//! state is rebuilt from it wholesale, never patched incrementally.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{ColumnId, QueryId, WorkPackageId};
use crate::query::QueryData;

/// Server-declared action links for one resource type, keyed by action name.
///
/// The presence of a key is what grants the capability; the href is kept for
/// the embedding layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSet(pub BTreeMap<String, String>);

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, action: impl Into<String>, href: impl Into<String>) {
        self.0.insert(action.into(), href.into());
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Descriptor for one renderable column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub groupable: bool,
}

impl ColumnDescriptor {
    /// Fallback descriptor for a column the server meta does not describe.
    pub fn untitled(id: ColumnId) -> Self {
        let title = id.as_str().to_string();
        Self {
            id,
            title,
            sortable: false,
            groupable: false,
        }
    }
}

/// One item of the fetched collection.
///
/// Attribute values are kept as rendered strings; the group key for a given
/// `group_by` attribute is looked up in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkPackage {
    pub id: WorkPackageId,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl WorkPackage {
    pub fn new(id: WorkPackageId) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(attribute.into(), value.into());
        self
    }

    pub fn field(&self, attribute: &str) -> Option<&str> {
        self.fields.get(attribute).map(String::as_str)
    }
}

/// Metadata slot of a list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub query: QueryData,
    /// Links attached to the query resource itself.
    #[serde(default)]
    pub query_links: LinkSet,
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    #[serde(default)]
    pub groupable_columns: Vec<ColumnDescriptor>,
    #[serde(default)]
    pub export_formats: Vec<String>,
    pub total_entries: u64,
    pub page: u32,
    pub per_page: u32,
    #[serde(default)]
    pub per_page_options: Vec<u32>,
    /// Item count per group value, keyed by the rendered group key.
    #[serde(default)]
    pub count_by_group: BTreeMap<String, u64>,
    /// Per-column aggregates (sums) for columns that support them.
    #[serde(default)]
    pub column_sums: BTreeMap<ColumnId, f64>,
    /// Links attached to the collection ("work_package" capabilities).
    #[serde(default)]
    pub links: LinkSet,
}

/// One fetched page of the list, with its metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    pub meta: ResponseMeta,
    #[serde(default)]
    pub work_packages: Vec<WorkPackage>,
    #[serde(default)]
    pub bulk_links: LinkSet,
}

/// Project metadata from the external project service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub identifier: String,
    pub name: String,
}

/// A saved query as listed in the project's grouped query menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQueryRef {
    pub id: QueryId,
    pub name: String,
    #[serde(default)]
    pub starred: bool,
}
