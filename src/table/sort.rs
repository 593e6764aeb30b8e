//! Row sort comparators.
//!
//! Dispatch is by the target column's [`SortType`] tag, one comparator per
//! tag. All sorts are stable: rows whose keys compare equal keep their
//! relative input order, in both directions.

use std::cmp::Ordering;

use crate::column::{ColumnDescriptor, Row, SortDirection, SortType};

/// Sort `rows` in place by `column`, scaled by `direction`.
pub fn sort_rows(rows: &mut [Row], column: &ColumnDescriptor, direction: SortDirection) {
    rows.sort_by(|a, b| direction.apply(compare_rows(a, b, column)));
}

/// Ascending comparison of two rows under a column's sort type.
pub fn compare_rows(a: &Row, b: &Row, column: &ColumnDescriptor) -> Ordering {
    match &column.sort_type {
        SortType::Number => compare_numbers(a.number(&column.id), b.number(&column.id)),
        SortType::Text => compare_text(a.text(&column.id), b.text(&column.id)),
        SortType::Custom(comparator) => comparator(a, b),
    }
}

/// Numeric total order; missing or non-numeric cells sort first.
fn compare_numbers(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Locale-folded lexicographic order: case-insensitive via Unicode lowercase
/// folding, so "alice" sorts before "Bob". Cells equal under folding compare
/// equal and keep their input order. Missing cells sort first.
fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let folded_a = a.to_lowercase();
            let folded_b = b.to_lowercase();
            folded_a.cmp(&folded_b)
        }
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
