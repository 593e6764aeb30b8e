use tabulist::column::{CellValue, ColumnDescriptor, Row, SortSpec, SortType};
use tabulist::render::Renderer;
use tabulist::ui::TableView;

fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("title", "Name").sortable(SortType::Text),
        ColumnDescriptor::new("price", "Price")
            .sortable(SortType::Number)
            .with_render_cell(|value: &CellValue| format!("${}", value.to_display())),
    ]
}

fn rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| Row::new().with("title", format!("item {i}")).with("price", i as i64))
        .collect()
}

#[test]
fn shell_render_captures_columns_and_clears_body() {
    let mut view = TableView::new();
    view.render_shell(&columns(), &SortSpec::ascending("title"));

    assert_eq!(view.row_count(), 0);
    assert_eq!(view.column_id_at(0), Some("title"));
    assert_eq!(view.column_id_at(1), Some("price"));
    assert_eq!(view.column_id_at(2), None);
}

#[test]
fn replace_and_append_track_row_counts() {
    let cols = columns();
    let mut view = TableView::new();
    view.render_shell(&cols, &SortSpec::ascending("title"));

    view.replace_rows(&cols, &rows(3));
    assert_eq!(view.row_count(), 3);

    view.append_rows(&cols, &rows(2));
    assert_eq!(view.row_count(), 5);

    view.replace_rows(&cols, &rows(1));
    assert_eq!(view.row_count(), 1);
}

#[test]
fn selection_is_clamped_when_the_body_shrinks() {
    let cols = columns();
    let mut view = TableView::new();
    view.render_shell(&cols, &SortSpec::ascending("title"));
    view.replace_rows(&cols, &rows(5));

    view.select_last();
    assert_eq!(view.selected(), Some(4));

    view.replace_rows(&cols, &rows(2));
    assert_eq!(view.selected(), Some(1));

    view.replace_rows(&cols, &rows(0));
    assert_eq!(view.selected(), None);
}

#[test]
fn near_bottom_respects_the_threshold() {
    let cols = columns();
    let mut view = TableView::new();
    view.render_shell(&cols, &SortSpec::ascending("title"));
    view.replace_rows(&cols, &rows(10));

    view.select_first();
    assert!(!view.near_bottom(3));

    for _ in 0..5 {
        view.select_next();
    }
    // Selected index 5 of 10 rows: within 4 of the last index.
    assert!(!view.near_bottom(3));
    assert!(view.near_bottom(4));

    view.select_last();
    assert!(view.near_bottom(1));
}

#[test]
fn selection_movement_stays_in_bounds() {
    let cols = columns();
    let mut view = TableView::new();
    view.render_shell(&cols, &SortSpec::ascending("title"));
    view.replace_rows(&cols, &rows(2));

    view.select_previous();
    assert_eq!(view.selected(), Some(0));

    view.select_next();
    view.select_next();
    view.select_next();
    assert_eq!(view.selected(), Some(1));
}
