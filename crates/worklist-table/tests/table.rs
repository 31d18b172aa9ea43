//! Integration tests for table construction.

use std::collections::BTreeMap;

use worklist_model::{
    ColumnDescriptor, ColumnId, ListResponse, Query, QueryData, ResponseMeta, TableRow,
    WorkPackage, WorkPackageId,
};
use worklist_table::build_table;

fn col(id: &str) -> ColumnId {
    ColumnId::new(id).expect("column id")
}

fn descriptor(id: &str, title: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        id: col(id),
        title: title.to_string(),
        sortable: true,
        groupable: false,
    }
}

fn query_with_columns(columns: &[&str], group_by: Option<&str>) -> Query {
    let mut query = Query::from_server_meta(
        None,
        QueryData::default(),
        columns.iter().map(|c| col(c)).collect(),
        vec![],
    );
    query.group_by = group_by.map(str::to_string);
    query
}

fn response(work_packages: Vec<WorkPackage>, counts: &[(&str, u64)]) -> ListResponse {
    let mut count_by_group = BTreeMap::new();
    for (key, count) in counts {
        count_by_group.insert((*key).to_string(), *count);
    }
    ListResponse {
        meta: ResponseMeta {
            total_entries: work_packages.len() as u64,
            page: 1,
            per_page: 20,
            count_by_group,
            ..ResponseMeta::default()
        },
        work_packages,
        bulk_links: Default::default(),
    }
}

#[test]
fn column_order_follows_query_not_server_meta() {
    let query = query_with_columns(&["a", "b", "c"], None);
    let mut resp = response(vec![], &[]);
    // Server lists descriptors in a different order.
    resp.meta.columns = vec![
        descriptor("c", "Column C"),
        descriptor("a", "Column A"),
        descriptor("b", "Column B"),
    ];

    let table = build_table(&query, &resp);
    let ids: Vec<&str> = table.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(table.columns[0].title, "Column A");
}

#[test]
fn undescribed_columns_get_synthesized_descriptors() {
    let query = query_with_columns(&["subject", "custom_field_9"], None);
    let mut resp = response(vec![], &[]);
    resp.meta.columns = vec![descriptor("subject", "Subject")];

    let table = build_table(&query, &resp);
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[1].title, "custom_field_9");
    assert!(!table.columns[1].sortable);
}

#[test]
fn ungrouped_rows_are_flat_and_ordered() {
    let query = query_with_columns(&["subject"], None);
    let resp = response(
        vec![
            WorkPackage::new(WorkPackageId(3)),
            WorkPackage::new(WorkPackageId(1)),
            WorkPackage::new(WorkPackageId(2)),
        ],
        &[],
    );

    let table = build_table(&query, &resp);
    let ids: Vec<u64> = table
        .rows
        .iter()
        .filter_map(|r| r.item_id().map(|id| id.0))
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(
        !table
            .rows
            .iter()
            .any(|r| matches!(r, TableRow::GroupHeader { .. }))
    );
}

#[test]
fn grouped_rows_preserve_group_order_with_header_counts() {
    let query = query_with_columns(&["subject"], Some("type"));
    let resp = response(
        vec![
            WorkPackage::new(WorkPackageId(1)).with_field("type", "Bug"),
            WorkPackage::new(WorkPackageId(2)).with_field("type", "Bug"),
            WorkPackage::new(WorkPackageId(3)).with_field("type", "Feature"),
        ],
        &[("Bug", 2), ("Feature", 1)],
    );

    let table = build_table(&query, &resp);
    assert_eq!(table.rows.len(), 5);
    assert_eq!(
        table.rows[0],
        TableRow::GroupHeader {
            key: "Bug".to_string(),
            count: 2
        }
    );
    assert_eq!(table.rows[1].item_id(), Some(WorkPackageId(1)));
    assert_eq!(table.rows[2].item_id(), Some(WorkPackageId(2)));
    assert_eq!(
        table.rows[3],
        TableRow::GroupHeader {
            key: "Feature".to_string(),
            count: 1
        }
    );
    assert_eq!(table.rows[4].item_id(), Some(WorkPackageId(3)));
}

#[test]
fn missing_server_count_falls_back_to_run_length() {
    let query = query_with_columns(&["subject"], Some("type"));
    let resp = response(
        vec![
            WorkPackage::new(WorkPackageId(1)).with_field("type", "Bug"),
            WorkPackage::new(WorkPackageId(2)).with_field("type", "Bug"),
        ],
        &[],
    );

    let table = build_table(&query, &resp);
    assert_eq!(
        table.rows[0],
        TableRow::GroupHeader {
            key: "Bug".to_string(),
            count: 2
        }
    );
}

#[test]
fn meta_counters_are_copied_verbatim() {
    let query = query_with_columns(&["subject"], None);
    let mut resp = response(vec![WorkPackage::new(WorkPackageId(1))], &[]);
    resp.meta.total_entries = 512;
    resp.meta
        .column_sums
        .insert(col("estimated_hours"), 40.5);
    resp.bulk_links.insert("delete", "/bulk/delete");

    let table = build_table(&query, &resp);
    assert_eq!(table.total_entries, 512);
    assert_eq!(
        table.column_sums.get(&col("estimated_hours")).copied(),
        Some(40.5)
    );
    assert!(!table.bulk_links.is_empty());
}
