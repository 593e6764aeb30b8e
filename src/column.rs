//! Column descriptors, sort specifications, cell values and rows.
//!
//! These are the static and per-record data types the table controller
//! operates on. Column descriptors are immutable after controller
//! construction; rows are opaque mappings from column id to a typed value.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A comparator over two rows, used by [`SortType::Custom`] columns.
pub type RowComparator = Arc<dyn Fn(&Row, &Row) -> Ordering + Send + Sync>;

/// A per-column cell formatting hook.
pub type CellFormatter = Arc<dyn Fn(&CellValue) -> String + Send + Sync>;

/// One typed cell value inside a [`Row`].
///
/// Deserializes directly from JSON, so a remote endpoint returning
/// `[{"title": "x", "price": 10}, ...]` maps straight onto rows. Arrays and
/// objects land in [`CellValue::Other`]; they render empty unless the column
/// carries a formatter, and they sort like missing cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl CellValue {
    /// Numeric view of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual view of the value, if it has one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Default display formatting used when a column has no formatter.
    pub fn to_display(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Text(s) => s.clone(),
            CellValue::Other(_) => String::new(),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// One record of tabular data, keyed by column id.
///
/// Identity is positional (order inside the controller's row sequence);
/// rows carry no stored key of their own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(HashMap<String, CellValue>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, convenient for demos and tests.
    pub fn with(mut self, id: &str, value: impl Into<CellValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<CellValue>) {
        self.0.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&CellValue> {
        self.0.get(id)
    }

    pub fn number(&self, id: &str) -> Option<f64> {
        self.get(id).and_then(CellValue::as_number)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(CellValue::as_text)
    }
}

/// Sort order for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction, used when the active column is clicked again.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Scale an ascending ordering by this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Wire representation, matching the `_order` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// The column and direction currently governing row order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }

    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self::new(column_id, SortDirection::Asc)
    }
}

/// How a sortable column's values compare.
///
/// One comparator per tag; there is no string-keyed dispatch, so an
/// unrecognized sort kind is unrepresentable and a `Custom` column always
/// carries its comparator.
#[derive(Clone)]
pub enum SortType {
    /// Numeric total order. Missing or non-numeric cells sort first.
    Number,
    /// Case-insensitive, locale-folded lexicographic order.
    Text,
    /// Delegates to a caller-supplied comparator over whole rows.
    Custom(RowComparator),
}

impl fmt::Debug for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortType::Number => write!(f, "Number"),
            SortType::Text => write!(f, "Text"),
            SortType::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Static definition of one table column's identity, sortability and
/// rendering. Immutable after controller construction.
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Unique key into row records.
    pub id: String,
    /// Header text.
    pub title: String,
    /// Whether header clicks on this column change the sort order.
    pub sortable: bool,
    /// Comparator family used when this column is sorted.
    pub sort_type: SortType,
    /// Optional per-cell formatting hook; defaults to
    /// [`CellValue::to_display`].
    pub render_cell: Option<CellFormatter>,
}

impl ColumnDescriptor {
    /// A plain, non-sortable text column.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sortable: false,
            sort_type: SortType::Text,
            render_cell: None,
        }
    }

    /// Mark the column sortable with the given comparator family.
    pub fn sortable(mut self, sort_type: SortType) -> Self {
        self.sortable = true;
        self.sort_type = sort_type;
        self
    }

    /// Attach a cell formatting hook.
    pub fn with_render_cell<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&CellValue) -> String + Send + Sync + 'static,
    {
        self.render_cell = Some(Arc::new(formatter));
        self
    }

    /// Format the cell this column selects out of a row.
    pub fn format_cell(&self, row: &Row) -> String {
        let value = row.get(&self.id).cloned().unwrap_or(CellValue::Null);
        match &self.render_cell {
            Some(formatter) => formatter(&value),
            None => value.to_display(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("sort_type", &self.sort_type)
            .field("render_cell", &self.render_cell.is_some())
            .finish()
    }
}
