mod common;

use common::{Walker, columns, pagination, recording_callbacks, table, walkers};
use pawdesk_table::{
    CellValue, Column, ColumnVisibility, Control, ControlMode, DataTable, EventResult, Key,
    PageIntent, Placeholder, RowSource, SortDirection, SortState, TableBody, TableCallbacks,
    TableConfig, TableInput, TableProps,
};

fn click(column_id: &str) -> TableInput {
    TableInput::HeaderClick {
        column_id: column_id.to_string(),
    }
}

fn names(table: &DataTable<Walker>) -> Vec<String> {
    table.visible_rows().iter().map(|w| w.name.clone()).collect()
}

// ============================================================================
// Slicing
// ============================================================================

#[test]
fn test_third_page_of_twenty_five() {
    let t = table(25, 3, 10);
    let info = t.page_info();
    assert_eq!(info.total_pages, 3);
    assert!(info.is_last_page);

    let rows = t.visible_rows();
    assert_eq!(rows.len(), 5);
    let ids: Vec<u32> = rows.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![20, 21, 22, 23, 24]);
}

#[test]
fn test_default_pagination_uses_data_length_and_config() {
    let t = DataTable::new(
        TableProps::new(walkers(42), columns()).config(TableConfig {
            default_page_size: 25,
            ..TableConfig::default()
        }),
        TableCallbacks::new(),
    );
    let state = t.page_state();
    assert_eq!(state.total_items, 42);
    assert_eq!(state.page_size, 25);
    assert_eq!(state.current_page, 1);
    assert_eq!(t.visible_rows().len(), 25);
}

#[test]
fn test_slice_is_clamped_to_short_data() {
    // Total claims more rows than were passed in
    let t = DataTable::new(
        TableProps::new(walkers(12), columns()).pagination(pagination(40, 3, 10)),
        TableCallbacks::new(),
    );
    assert!(t.visible_rows().is_empty());

    let t = DataTable::new(
        TableProps::new(walkers(15), columns()).pagination(pagination(40, 2, 10)),
        TableCallbacks::new(),
    );
    assert_eq!(t.visible_rows().len(), 5);
}

#[test]
fn test_server_rows_are_shown_as_the_page() {
    let page: Vec<Walker> = walkers(25).into_iter().skip(20).collect();
    let t = DataTable::new(
        TableProps::new(page, columns())
            .pagination(pagination(25, 3, 10))
            .row_source(RowSource::Server),
        TableCallbacks::new(),
    );
    assert_eq!(t.visible_rows().len(), 5);
    assert_eq!(t.visible_rows()[0].id, 20);

    let view = t.view();
    let indexes: Vec<usize> = view.body.rows().iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![20, 21, 22, 23, 24]);
}

#[test]
fn test_server_rows_are_capped_at_page_size() {
    let t = DataTable::new(
        TableProps::new(walkers(30), columns())
            .pagination(pagination(300, 1, 10))
            .row_source(RowSource::Server),
        TableCallbacks::new(),
    );
    assert_eq!(t.visible_rows().len(), 10);
    assert_eq!(t.page_info().total_pages, 30);
}

#[test]
fn test_server_paging_round_trip() {
    let all = walkers(300);
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(
        TableProps::new(all[..10].to_vec(), columns())
            .pagination(pagination(300, 1, 10))
            .row_source(RowSource::Server),
        callbacks,
    );

    assert_eq!(t.navigate(PageIntent::Next), EventResult::Consumed);
    assert_eq!(reports.borrow().pages, vec![2]);

    // The parent fetches page 2 and hands it over with the server total
    t.set_data(all[10..20].to_vec(), 300);

    assert_eq!(t.visible_rows().len(), 10);
    assert_eq!(t.visible_rows()[0], all[10]);
    assert_eq!(t.page_info().total_pages, 30);
    assert_eq!(t.page_state().current_page, 2);

    let view = t.view();
    assert_eq!(view.body.rows()[0].index, 10);
    assert_eq!(view.body.rows()[0].key, "walker-10");

    // Same total, so the page did not move and nothing else was reported
    assert_eq!(reports.borrow().pages, vec![2]);
}

#[test]
fn test_empty_data_is_one_empty_page() {
    let t = table(0, 1, 10);
    assert_eq!(t.page_info().total_pages, 1);
    assert!(t.visible_rows().is_empty());
    match t.view().body {
        TableBody::Placeholder { kind, label, .. } => {
            assert_eq!(kind, Placeholder::Empty);
            assert_eq!(label, "No records found");
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_header_clicks_report_sort_sequence() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(TableProps::new(walkers(5), columns()), callbacks);

    assert_eq!(t.handle(click("name")), EventResult::Consumed);
    assert_eq!(t.handle(click("name")), EventResult::Consumed);
    assert_eq!(t.handle(click("email")), EventResult::Consumed);

    assert_eq!(
        reports.borrow().sorts,
        vec![
            SortState::new("name", SortDirection::Asc),
            SortState::new("name", SortDirection::Desc),
            SortState::new("email", SortDirection::Asc),
        ]
    );
    assert_eq!(t.sort_state(), &SortState::new("email", SortDirection::Asc));
}

#[test]
fn test_sorting_never_reorders_data() {
    let mut t = table(5, 1, 10);
    let before = names(&t);
    t.handle(click("name"));
    t.handle(click("name"));
    assert_eq!(names(&t), before);
    assert_eq!(t.data(), walkers(5).as_slice());
}

#[test]
fn test_non_sortable_header_is_ignored() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(TableProps::new(walkers(5), columns()), callbacks);

    assert_eq!(t.handle(click("walks")), EventResult::Ignored);
    assert_eq!(t.handle(click("missing")), EventResult::Ignored);
    assert!(reports.borrow().sorts.is_empty());
    assert!(!t.sort_state().is_sorted());
}

#[test]
fn test_sortable_column_without_field_is_ignored() {
    let mut column = Column::new("status", "Status").field("status");
    column.sortable = true;
    let mut t = DataTable::new(
        TableProps::new(walkers(3), vec![column]),
        TableCallbacks::new(),
    );
    assert_eq!(t.handle(click("status")), EventResult::Ignored);
}

#[test]
fn test_hidden_column_cannot_be_sorted() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(
        TableProps::new(walkers(5), columns())
            .column_visibility(ColumnVisibility::new().with("email", false)),
        callbacks,
    );
    assert_eq!(t.handle(click("email")), EventResult::Ignored);
    assert!(reports.borrow().sorts.is_empty());
}

#[test]
fn test_controlled_sort_waits_for_sync() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(
        TableProps::new(walkers(5), columns()).sort(Control::Controlled(SortState::unsorted())),
        callbacks,
    );
    assert_eq!(t.sort_mode(), ControlMode::Controlled);

    t.handle(click("name"));
    assert_eq!(
        reports.borrow().sorts,
        vec![SortState::new("name", SortDirection::Asc)]
    );
    assert!(!t.sort_state().is_sorted());

    t.sync_sort(SortState::new("name", SortDirection::Asc));
    t.handle(click("name"));
    assert_eq!(
        reports.borrow().sorts.last(),
        Some(&SortState::new("name", SortDirection::Desc))
    );
}

#[test]
fn test_clear_sort_reports_unsorted_once() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(TableProps::new(walkers(5), columns()), callbacks);

    assert_eq!(t.handle(TableInput::ClearSort), EventResult::Ignored);
    t.handle(click("email"));
    assert_eq!(t.handle(TableInput::ClearSort), EventResult::Consumed);
    assert!(!t.sort_state().is_sorted());
    assert_eq!(
        reports.borrow().sorts,
        vec![
            SortState::new("email", SortDirection::Asc),
            SortState::unsorted()
        ]
    );
}

#[test]
fn test_uncontrolled_sort_ignores_sync() {
    let mut t = table(5, 1, 10);
    t.sync_sort(SortState::new("email", SortDirection::Desc));
    assert!(!t.sort_state().is_sorted());
}

#[test]
fn test_initial_uncontrolled_sort_is_used() {
    let mut t = DataTable::new(
        TableProps::new(walkers(5), columns()).sort(Control::Uncontrolled(SortState::new(
            "name",
            SortDirection::Asc,
        ))),
        TableCallbacks::new(),
    );
    t.handle(click("name"));
    assert_eq!(t.sort_state(), &SortState::new("name", SortDirection::Desc));
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_navigation_reports_page_changes() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(
        TableProps::new(walkers(25), columns()).pagination(pagination(25, 1, 10)),
        callbacks,
    );

    assert_eq!(t.navigate(PageIntent::Next), EventResult::Consumed);
    assert_eq!(t.navigate(PageIntent::Last), EventResult::Consumed);
    assert_eq!(t.navigate(PageIntent::Next), EventResult::Ignored);
    assert_eq!(t.navigate(PageIntent::GoTo(3)), EventResult::Ignored);
    assert_eq!(t.navigate(PageIntent::First), EventResult::Consumed);
    assert_eq!(t.navigate(PageIntent::Previous), EventResult::Ignored);

    assert_eq!(reports.borrow().pages, vec![2, 3, 1]);
    assert!(reports.borrow().page_sizes.is_empty());
}

#[test]
fn test_page_size_change_reports_size_and_page() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(
        TableProps::new(walkers(95), columns()).pagination(pagination(95, 3, 10)),
        callbacks,
    );

    assert_eq!(
        t.navigate(PageIntent::SetPageSize(25)),
        EventResult::Consumed
    );
    assert_eq!(t.page_state().page_size, 25);
    assert_eq!(t.page_state().current_page, 1);
    assert_eq!(reports.borrow().page_sizes, vec![25]);
    assert_eq!(reports.borrow().pages, vec![1]);
}

#[test]
fn test_cycle_page_size_walks_options() {
    let mut t = table(95, 1, 10);
    t.handle(TableInput::CyclePageSize);
    assert_eq!(t.page_state().page_size, 25);
    t.handle(TableInput::CyclePageSize);
    t.handle(TableInput::CyclePageSize);
    assert_eq!(t.page_state().page_size, 100);
    t.handle(TableInput::CyclePageSize);
    assert_eq!(t.page_state().page_size, 10);
}

#[test]
fn test_controlled_pagination_waits_for_sync() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(
        TableProps::new(walkers(25), columns()).controlled_pagination(pagination(25, 1, 10)),
        callbacks,
    );
    assert_eq!(t.pagination_mode(), ControlMode::Controlled);

    t.navigate(PageIntent::Next);
    assert_eq!(reports.borrow().pages, vec![2]);
    assert_eq!(t.page_state().current_page, 1);

    t.sync_pagination(pagination(25, 2, 10));
    assert_eq!(t.page_state().current_page, 2);
    assert_eq!(t.visible_rows()[0].id, 10);
}

#[test]
fn test_shrinking_data_reclamps_page() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(
        TableProps::new(walkers(50), columns()).pagination(pagination(50, 5, 10)),
        callbacks,
    );
    t.set_rows(walkers(12));
    assert_eq!(t.page_state().current_page, 2);
    assert_eq!(t.visible_rows().len(), 2);
    assert_eq!(reports.borrow().pages, vec![2]);

    // Growing does not move the page
    t.set_rows(walkers(80));
    assert_eq!(t.page_state().current_page, 2);
    assert_eq!(reports.borrow().pages, vec![2]);
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_header_cursor_and_activation() {
    let (reports, callbacks) = recording_callbacks();
    let mut t = DataTable::new(TableProps::new(walkers(5), columns()), callbacks);

    assert_eq!(t.focused_header(), None);
    assert_eq!(t.handle(TableInput::Key(Key::Enter)), EventResult::Ignored);

    t.handle(TableInput::Key(Key::Right));
    assert_eq!(t.focused_header(), Some("name"));
    t.handle(TableInput::Key(Key::Right));
    assert_eq!(t.focused_header(), Some("email"));

    assert_eq!(
        t.handle(TableInput::Key(Key::Char(' '))),
        EventResult::Consumed
    );
    assert_eq!(
        reports.borrow().sorts,
        vec![SortState::new("email", SortDirection::Asc)]
    );

    t.handle(TableInput::Key(Key::Right));
    assert_eq!(t.handle(TableInput::Key(Key::Right)), EventResult::Ignored);
    assert_eq!(t.focused_header(), Some("walks"));
    assert_eq!(t.handle(TableInput::Key(Key::Enter)), EventResult::Ignored);

    t.handle(TableInput::Key(Key::Escape));
    assert_eq!(t.focused_header(), None);
}

#[test]
fn test_header_key_activation() {
    let mut t = table(5, 1, 10);
    let key = |k| TableInput::HeaderKey {
        column_id: "name".to_string(),
        key: k,
    };
    assert_eq!(t.handle(key(Key::Char('x'))), EventResult::Ignored);
    assert_eq!(t.handle(key(Key::Enter)), EventResult::Consumed);
    assert_eq!(t.handle(key(Key::Char(' '))), EventResult::Consumed);
    assert_eq!(t.sort_state(), &SortState::new("name", SortDirection::Desc));
}

#[test]
fn test_paging_keys() {
    let mut t = table(45, 1, 10);
    t.handle(TableInput::Key(Key::PageDown));
    assert_eq!(t.page_state().current_page, 2);
    t.handle(TableInput::Key(Key::End));
    assert_eq!(t.page_state().current_page, 5);
    t.handle(TableInput::Key(Key::PageUp));
    assert_eq!(t.page_state().current_page, 4);
    t.handle(TableInput::Key(Key::Home));
    assert_eq!(t.page_state().current_page, 1);
}

#[test]
fn test_hiding_columns_clamps_header_cursor() {
    let mut t = table(5, 1, 10);
    for _ in 0..3 {
        t.handle(TableInput::Key(Key::Right));
    }
    assert_eq!(t.focused_header(), Some("walks"));

    t.set_column_visibility(ColumnVisibility::new().with("walks", false));
    assert_eq!(t.focused_header(), Some("email"));
}

// ============================================================================
// Cells and visibility
// ============================================================================

#[test]
fn test_cell_resolution_order() {
    let columns: Vec<Column<Walker>> = vec![
        Column::new("rendered", "R")
            .field("name")
            .render(|w: &Walker, i| format!("{}#{}", w.id, i).into()),
        Column::new("field", "F").field("email"),
        Column::new("mapped", "M").map(|w: &Walker| CellValue::from(w.walks * 2)),
        Column::new("bare", "B"),
    ];
    let t = DataTable::new(
        TableProps::new(walkers(15), columns).pagination(pagination(15, 2, 10)),
        TableCallbacks::new(),
    );
    let view = t.view();
    let first = &view.body.rows()[0];
    let values: Vec<&CellValue> = first.cells.iter().map(|c| &c.value).collect();

    // The renderer gets the index within the page
    assert_eq!(values[0], &CellValue::Text("10#0".to_string()));
    assert_eq!(values[1], &CellValue::Text("w10@example.com".to_string()));
    assert_eq!(values[2], &CellValue::Integer(60));
    assert_eq!(values[3], &CellValue::Empty);
    assert_eq!(first.key, "walker-10");
    assert_eq!(first.index, 10);
}

#[test]
fn test_hidden_column_is_omitted_everywhere() {
    let t = DataTable::new(
        TableProps::new(walkers(3), columns())
            .column_visibility(ColumnVisibility::new().with("email", false)),
        TableCallbacks::new(),
    );
    let view = t.view();
    assert_eq!(view.col_count, 2);
    assert!(view.header.iter().all(|h| h.column_id != "email"));
    for row in view.body.rows() {
        assert_eq!(row.cells.len(), 2);
        assert!(row.cells.iter().all(|c| c.column_id != "email"));
    }
}

#[test]
fn test_placeholder_span_excludes_hidden_columns() {
    let t = DataTable::new(
        TableProps::new(Vec::new(), columns())
            .column_visibility(ColumnVisibility::new().with("email", false)),
        TableCallbacks::new(),
    );
    match t.view().body {
        TableBody::Placeholder { colspan, kind, .. } => {
            assert_eq!(kind, Placeholder::Empty);
            assert_eq!(colspan, 2);
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn test_loading_placeholder_only_when_slice_empty() {
    let mut t = DataTable::new(
        TableProps::new(Vec::new(), columns()).loading(true),
        TableCallbacks::new(),
    );
    match t.view().body {
        TableBody::Placeholder { kind, label, colspan } => {
            assert_eq!(kind, Placeholder::Loading);
            assert_eq!(label, "Loading…");
            assert_eq!(colspan, 3);
        }
        other => panic!("expected placeholder, got {other:?}"),
    }

    t.set_rows(walkers(3));
    let view = t.view();
    assert!(view.is_loading);
    assert_eq!(view.body.rows().len(), 3);

    t.set_loading(false);
    assert!(!t.is_loading());
}

#[test]
fn test_header_reports_aria_sort() {
    let mut t = table(5, 1, 10);
    t.handle(click("name"));
    t.handle(click("name"));
    let view = t.view();
    assert_eq!(view.header[0].aria_sort(), "descending");
    assert_eq!(view.header[1].aria_sort(), "none");
    assert_eq!(view.header[2].aria_sort(), "none");
    assert!(!view.header[2].sortable);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "duplicate column id")]
fn test_duplicate_column_ids_assert_in_debug() {
    let columns: Vec<Column<Walker>> = vec![
        Column::new("name", "Name").field("name"),
        Column::new("name", "Again").field("email"),
    ];
    let _ = DataTable::new(TableProps::new(walkers(1), columns), TableCallbacks::new());
}

// ============================================================================
// Isolation
// ============================================================================

#[test]
fn test_tables_do_not_share_state() {
    let mut a = table(30, 1, 10);
    let b = table(30, 1, 10);
    a.handle(click("name"));
    a.navigate(PageIntent::Next);
    assert!(!b.sort_state().is_sorted());
    assert_eq!(b.page_state().current_page, 1);
    assert_eq!(a.page_state().current_page, 2);
}
