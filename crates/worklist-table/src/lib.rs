//! Builds the render-ready table from a fetched list page.
//!
//! The builder is pure: one [`Query`] plus one [`ListResponse`] in, one
//! [`TableState`] out. The state is rebuilt wholesale on every successful
//! fetch rather than patched, so a render in progress always sees an atomic
//! snapshot.

#![deny(unsafe_code)]

use tracing::debug;

use worklist_model::{
    ColumnDescriptor, ListResponse, Query, ResponseMeta, TableRow, TableState, WorkPackage,
};

/// Build the table state for one fetched page.
///
/// Column order comes from the query — user column choice is authoritative,
/// whatever order the server meta lists descriptors in. When `group_by` is
/// set, items are partitioned into contiguous groups in server order, with a
/// synthetic header row opening each group.
pub fn build_table(query: &Query, response: &ListResponse) -> TableState {
    let meta = &response.meta;
    TableState {
        rows: build_rows(query.group_by.as_deref(), &response.work_packages, meta),
        columns: resolve_columns(query, meta),
        groupable_columns: meta.groupable_columns.clone(),
        column_sums: meta.column_sums.clone(),
        total_entries: meta.total_entries,
        bulk_links: response.bulk_links.clone(),
    }
}

/// Look up a descriptor for each query column, in query order.
///
/// A column the server meta does not describe still renders; it gets a
/// descriptor synthesized from its id.
fn resolve_columns(query: &Query, meta: &ResponseMeta) -> Vec<ColumnDescriptor> {
    query
        .columns
        .iter()
        .map(|id| {
            meta.columns
                .iter()
                .find(|descriptor| &descriptor.id == id)
                .cloned()
                .unwrap_or_else(|| ColumnDescriptor::untitled(id.clone()))
        })
        .collect()
}

fn build_rows(
    group_by: Option<&str>,
    work_packages: &[WorkPackage],
    meta: &ResponseMeta,
) -> Vec<TableRow> {
    let Some(attribute) = group_by else {
        return work_packages
            .iter()
            .cloned()
            .map(TableRow::Item)
            .collect();
    };

    let mut rows = Vec::with_capacity(work_packages.len());
    for (key, items) in contiguous_groups(attribute, work_packages) {
        let count = match meta.count_by_group.get(&key) {
            Some(count) => *count,
            None => {
                debug!(group = %key, "no server count for group, using run length");
                items.len() as u64
            }
        };
        rows.push(TableRow::GroupHeader { key, count });
        rows.extend(items.iter().map(|wp| TableRow::Item((*wp).clone())));
    }
    rows
}

/// Partition items into runs sharing a group key, preserving server order.
///
/// The server returns the collection already sorted by the grouping
/// attribute; a key that reappears later starts a new run rather than being
/// merged back.
fn contiguous_groups<'a>(
    attribute: &str,
    work_packages: &'a [WorkPackage],
) -> Vec<(String, Vec<&'a WorkPackage>)> {
    let mut groups: Vec<(String, Vec<&WorkPackage>)> = Vec::new();
    for wp in work_packages {
        let key = wp.field(attribute).unwrap_or_default().to_string();
        match groups.last_mut() {
            Some((current, items)) if *current == key => items.push(wp),
            _ => groups.push((key, vec![wp])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use worklist_model::WorkPackageId;

    use super::*;

    #[test]
    fn contiguous_groups_do_not_merge_reappearing_keys() {
        let items = vec![
            WorkPackage::new(WorkPackageId(1)).with_field("type", "Bug"),
            WorkPackage::new(WorkPackageId(2)).with_field("type", "Task"),
            WorkPackage::new(WorkPackageId(3)).with_field("type", "Bug"),
        ];
        let groups = contiguous_groups("type", &items);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, "Bug");
        assert_eq!(groups[1].0, "Task");
        assert_eq!(groups[2].0, "Bug");
    }

    #[test]
    fn missing_group_attribute_falls_into_empty_key() {
        let items = vec![WorkPackage::new(WorkPackageId(1))];
        let groups = contiguous_groups("type", &items);
        assert_eq!(groups[0].0, "");
    }
}
