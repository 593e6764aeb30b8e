use tabulist::column::{CellValue, ColumnDescriptor, Row, SortType};

#[test]
fn rows_deserialize_from_json_records() {
    let rows: Vec<Row> = serde_json::from_str(
        r#"[
            {"title": "Laptop", "price": 1499.5, "quantity": 3, "archived": false, "note": null},
            {"title": "Mouse", "price": 20, "quantity": 120, "archived": true, "note": "bulk"}
        ]"#,
    )
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text("title"), Some("Laptop"));
    assert_eq!(rows[0].number("price"), Some(1499.5));
    assert_eq!(rows[0].get("archived"), Some(&CellValue::Bool(false)));
    assert_eq!(rows[0].get("note"), Some(&CellValue::Null));
    assert_eq!(rows[1].number("quantity"), Some(120.0));
    assert_eq!(rows[1].text("note"), Some("bulk"));
}

#[test]
fn rows_with_array_and_object_fields_deserialize() {
    // Product endpoints attach image lists and nested category objects to
    // each record; those cells must not break deserialization of the row.
    let rows: Vec<Row> = serde_json::from_str(
        r#"[{
            "title": "widget",
            "price": 10,
            "images": [{"url": "https://cdn.example.com/w.jpg", "source": "w.jpg"}],
            "subcategory": {"id": "tools", "title": "Tools"}
        }]"#,
    )
    .unwrap();

    assert_eq!(rows[0].text("title"), Some("widget"));
    assert_eq!(rows[0].number("price"), Some(10.0));

    // Non-scalar cells have no scalar views and render empty by default.
    let images = rows[0].get("images").unwrap();
    assert!(matches!(images, CellValue::Other(_)));
    assert_eq!(images.as_number(), None);
    assert_eq!(images.as_text(), None);
    assert_eq!(images.to_display(), "");
}

#[test]
fn cell_values_round_trip_through_json() {
    let row = Row::new()
        .with("title", "Keyboard")
        .with("price", 49.9)
        .with("in_stock", true);

    let json = serde_json::to_string(&row).unwrap();
    let back: Row = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);
}

#[test]
fn default_display_trims_integral_numbers() {
    assert_eq!(CellValue::Number(20.0).to_display(), "20");
    assert_eq!(CellValue::Number(19.99).to_display(), "19.99");
    assert_eq!(CellValue::Null.to_display(), "");
    assert_eq!(CellValue::Bool(true).to_display(), "true");
    assert_eq!(CellValue::Text("x".to_string()).to_display(), "x");
}

#[test]
fn cell_formatter_overrides_default_display() {
    let column = ColumnDescriptor::new("price", "Price")
        .sortable(SortType::Number)
        .with_render_cell(|value: &CellValue| format!("${}", value.to_display()));

    let row = Row::new().with("price", 100);
    assert_eq!(column.format_cell(&row), "$100");

    // Missing cells format as the Null value.
    let plain = ColumnDescriptor::new("note", "Note");
    assert_eq!(plain.format_cell(&row), "");
}
