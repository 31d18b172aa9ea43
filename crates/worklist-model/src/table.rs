#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::ids::{ColumnId, WorkPackageId};
use crate::response::{ColumnDescriptor, LinkSet, WorkPackage};

/// One entry of the rendered row sequence.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableRow {
    /// Synthetic header opening a group, carrying the group's item count.
    GroupHeader { key: String, count: u64 },
    Item(WorkPackage),
}

impl TableRow {
    pub fn item_id(&self) -> Option<WorkPackageId> {
        match self {
            Self::Item(wp) => Some(wp.id),
            Self::GroupHeader { .. } => None,
        }
    }
}

/// Render-ready table state, rebuilt wholesale on every successful fetch.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TableState {
    pub rows: Vec<TableRow>,
    pub columns: Vec<ColumnDescriptor>,
    pub groupable_columns: Vec<ColumnDescriptor>,
    pub column_sums: BTreeMap<ColumnId, f64>,
    pub total_entries: u64,
    pub bulk_links: LinkSet,
}

impl TableState {
    /// Identifier of the first data row, skipping group headers.
    pub fn first_item_id(&self) -> Option<WorkPackageId> {
        self.rows.iter().find_map(TableRow::item_id)
    }
}

/// Current page position, mutated by user action or server defaults and read
/// by the next fetch request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaginationState {
    pub page: u32,
    pub per_page: u32,
    pub per_page_options: Vec<u32>,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            per_page_options: Vec::new(),
        }
    }
}

/// The slice of pagination state a fetch request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PaginationOptions {
    pub page: u32,
    pub per_page: u32,
}
