//! Data source abstraction layer.
//!
//! This module defines the common interface the table controller fetches
//! row slices through, along with the query and error types shared by all
//! source implementations.

use async_trait::async_trait;

use crate::column::{Row, SortDirection};

pub mod http;
pub mod memory;

/// Common error types for source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned status {status}")]
    Http { status: u16 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("source error: {0}")]
    Other(String),
}

/// One request for a sorted slice of rows.
///
/// `range_start` is 1-based and the range is half-open. `range_end` of
/// `None` asks for the full set; the controller issues that exactly once,
/// at init in local-sort mode.
#[derive(Clone, Debug, PartialEq)]
pub struct RowQuery {
    pub sort_column: String,
    pub direction: SortDirection,
    pub range_start: u64,
    pub range_end: Option<u64>,
}

/// Source trait all row providers implement.
///
/// In remote mode the returned rows must already be sorted and sliced
/// according to the query. Timeout and retry policy belong to the
/// implementation; the controller enforces neither.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, query: &RowQuery) -> Result<Vec<Row>, SourceError>;
}
