//! Tests for worklist-model types.

use worklist_model::{ColumnId, Filter, Query, QueryData, QueryId, TableRow, TableState, WorkPackage, WorkPackageId};

fn col(id: &str) -> ColumnId {
    ColumnId::new(id).expect("column id")
}

#[test]
fn from_server_meta_starts_clean() {
    let data = QueryData {
        name: Some("Open bugs".to_string()),
        filters: vec![Filter::new("status", "=")],
        columns: vec![],
        group_by: None,
        page: None,
        per_page: None,
    };
    let query = Query::from_server_meta(
        Some(QueryId::new("5").unwrap()),
        data,
        vec![col("subject")],
        vec!["csv".to_string()],
    );
    assert!(!query.dirty);
    assert_eq!(query.columns, vec![col("subject")]);
    assert_eq!(query.export_formats, vec!["csv".to_string()]);
}

#[test]
fn from_token_data_starts_dirty() {
    let query = Query::from_token_data(None, QueryData::default());
    assert!(query.dirty);
    assert!(query.id.is_none());
}

#[test]
fn merge_preserves_local_edits_and_dirty_flag() {
    let mut query = Query::from_server_meta(
        Some(QueryId::new("5").unwrap()),
        QueryData {
            filters: vec![Filter::new("status", "=").with_values(vec!["open".to_string()])],
            ..QueryData::default()
        },
        vec![col("subject")],
        vec![],
    );
    query.group_by = Some("type".to_string());

    let server = QueryData {
        name: Some("Server name".to_string()),
        filters: vec![Filter::new("assignee", "=")],
        ..QueryData::default()
    };
    query.merge_server_meta(&server, vec![col("x"), col("y")], vec!["pdf".to_string()]);

    assert_eq!(query.columns, vec![col("x"), col("y")]);
    assert_eq!(query.export_formats, vec!["pdf".to_string()]);
    // Local filter edits and grouping survive the merge.
    assert_eq!(query.filters.len(), 1);
    assert_eq!(query.filters[0].attribute, "status");
    assert_eq!(query.group_by.as_deref(), Some("type"));
    assert!(!query.dirty);
}

#[test]
fn to_data_round_trips_configuration() {
    let mut query = Query::from_token_data(
        None,
        QueryData {
            filters: vec![Filter::new("type", "=").deactivated()],
            columns: vec![col("a"), col("b")],
            group_by: Some("status".to_string()),
            page: Some(3),
            per_page: Some(100),
            name: None,
        },
    );
    query.name = Some("scratch".to_string());

    let data = query.to_data();
    assert_eq!(data.columns, vec![col("a"), col("b")]);
    assert_eq!(data.group_by.as_deref(), Some("status"));
    assert_eq!(data.page, Some(3));
    assert_eq!(data.per_page, Some(100));
    assert!(data.filters[0].deactivated);
}

#[test]
fn first_item_id_skips_group_headers() {
    let state = TableState {
        rows: vec![
            TableRow::GroupHeader {
                key: "Bug".to_string(),
                count: 1,
            },
            TableRow::Item(WorkPackage::new(WorkPackageId(42))),
        ],
        ..TableState::default()
    };
    assert_eq!(state.first_item_id(), Some(WorkPackageId(42)));

    let empty = TableState::default();
    assert_eq!(empty.first_item_id(), None);
}
