//! Renderer contract driven by the table controller.

use crate::column::{ColumnDescriptor, Row, SortSpec};

/// Display collaborator owned and invoked by
/// [`TableController`](crate::table::TableController), never vice versa.
///
/// A full re-render (`render_shell` then `replace_rows`) happens at
/// construction and on any local re-sort or wholesale row replacement;
/// pagination only ever calls `append_rows`. The header is never rebuilt
/// after the shell render except through `set_sort_indicator`.
pub trait Renderer {
    /// Build the empty table shell: header cells and the initial sort
    /// indicator. Called once at construction.
    fn render_shell(&mut self, columns: &[ColumnDescriptor], sort: &SortSpec);

    /// Replace the entire body with `rows`.
    fn replace_rows(&mut self, columns: &[ColumnDescriptor], rows: &[Row]);

    /// Append `rows` after the existing body content, leaving prior rows
    /// and their rendered positions untouched.
    fn append_rows(&mut self, columns: &[ColumnDescriptor], rows: &[Row]);

    /// Move the sort indicator to the given column and direction.
    fn set_sort_indicator(&mut self, sort: &SortSpec);

    /// Toggle the explicit empty-state placeholder.
    fn set_empty(&mut self, empty: bool);

    /// Toggle the loading indicator shown while a fetch is in flight.
    fn set_loading(&mut self, loading: bool);
}
