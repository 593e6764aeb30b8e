//! In-memory data source.
//!
//! Holds a full row set and serves sorted, sliced pages per query. Backs
//! local-sort mode and offline use; tests lean on it heavily.

use async_trait::async_trait;

use super::{DataSource, RowQuery, SourceError};
use crate::column::{ColumnDescriptor, Row};
use crate::table::sort;

/// Data source over a fully loaded row set.
pub struct MemorySource {
    columns: Vec<ColumnDescriptor>,
    rows: Vec<Row>,
}

impl MemorySource {
    /// `columns` must describe every sort column queries will name; the
    /// descriptors carry the comparator used to serve sorted pages.
    pub fn new(columns: Vec<ColumnDescriptor>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch(&self, query: &RowQuery) -> Result<Vec<Row>, SourceError> {
        let column = self
            .columns
            .iter()
            .find(|c| c.id == query.sort_column)
            .ok_or_else(|| {
                SourceError::InvalidData(format!("unknown sort column '{}'", query.sort_column))
            })?;
        if query.range_start == 0 {
            return Err(SourceError::InvalidData(
                "range_start is 1-based and must be greater than zero".to_string(),
            ));
        }

        let mut rows = self.rows.clone();
        sort::sort_rows(&mut rows, column, query.direction);

        let from = (query.range_start - 1) as usize;
        if from >= rows.len() {
            return Ok(Vec::new());
        }
        let to = match query.range_end {
            Some(end) => ((end.saturating_sub(1)) as usize).clamp(from, rows.len()),
            None => rows.len(),
        };

        Ok(rows[from..to].to_vec())
    }
}
