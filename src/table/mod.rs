//! The table controller state machine.
//!
//! [`TableController`] owns all table state: the row sequence, the active
//! sort, the page window, the loading flag and the empty-state marker. It
//! drives a [`Renderer`] and pulls page-sized row slices from a
//! [`DataSource`]. Hosts feed it two inputs, header clicks and
//! scroll-near-bottom notifications, and drain its emitted events.

use log::{debug, warn};

use crate::column::{ColumnDescriptor, Row, SortDirection, SortSpec};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::registry::Widget;
use crate::render::Renderer;
use crate::source::{DataSource, RowQuery};

pub mod sort;

/// Errors in column or option configuration.
///
/// These are fatal, raised synchronously at construction, and never retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no sortable column and no initial sort specified")]
    NoSortableColumn,

    #[error("unknown sort column '{0}'")]
    UnknownColumn(String),

    #[error("column '{0}' is not sortable")]
    NotSortable(String),

    #[error("duplicate column id '{0}'")]
    DuplicateColumn(String),

    #[error("page_size must be greater than zero")]
    InvalidPageSize,
}

/// Options bag recognized by [`TableController::new`].
#[derive(Clone, Debug)]
pub struct TableOptions {
    /// Rows requested per page in remote mode.
    pub page_size: u64,
    /// Local mode re-orders the fully loaded row set in memory and never
    /// paginates; remote mode re-requests sorted, paginated data.
    pub sort_locally: bool,
    /// Sort applied at construction. Defaults to the first sortable column,
    /// ascending.
    pub initial_sort: Option<SortSpec>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_locally: false,
            initial_sort: None,
        }
    }
}

impl TableOptions {
    /// Resolve the configured initial sort against the column set.
    ///
    /// This is the explicit configuration-resolution step: it runs once at
    /// construction and validates the result before any state is built.
    pub fn resolve_initial_sort(
        &self,
        columns: &[ColumnDescriptor],
    ) -> Result<SortSpec, ConfigError> {
        let sort = match &self.initial_sort {
            Some(sort) => sort.clone(),
            None => columns
                .iter()
                .find(|c| c.sortable)
                .map(|c| SortSpec::ascending(c.id.clone()))
                .ok_or(ConfigError::NoSortableColumn)?,
        };

        let column = columns
            .iter()
            .find(|c| c.id == sort.column_id)
            .ok_or_else(|| ConfigError::UnknownColumn(sort.column_id.clone()))?;
        if !column.sortable {
            return Err(ConfigError::NotSortable(sort.column_id.clone()));
        }

        Ok(sort)
    }
}

/// The half-open, 1-based index range of rows requested from a remote
/// source: `end = start + size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub start: u64,
    pub size: u64,
}

impl PageWindow {
    pub fn first(size: u64) -> Self {
        Self { start: 1, size }
    }

    pub fn end(&self) -> u64 {
        self.start + self.size
    }

    /// The candidate window for the next page: starts where this one ends.
    pub fn next(&self) -> Self {
        Self {
            start: self.end(),
            size: self.size,
        }
    }
}

/// Events the controller emits to its host.
#[derive(Clone, Debug, PartialEq)]
pub enum TableEvent {
    /// The active sort changed (header click on a sortable column).
    SortChanged {
        column_id: String,
        direction: SortDirection,
    },
    /// A page of rows was appended by scroll pagination.
    RowsAppended { count: usize },
    /// A fetch failed; rows and window keep their last-known-good value.
    LoadFailed { message: String },
}

/// Sortable, paginated table controller.
///
/// At most one fetch is in flight at a time: header clicks and scroll
/// notifications arriving while `loading` is set are dropped, not queued.
/// Every fetch carries a generation tag; a response whose generation is
/// stale by the time it completes is discarded without touching state.
pub struct TableController<S, R> {
    columns: Vec<ColumnDescriptor>,
    source: S,
    renderer: R,
    rows: Vec<Row>,
    sort: SortSpec,
    window: PageWindow,
    sort_locally: bool,
    loading: bool,
    empty: bool,
    generation: u64,
    events: Vec<TableEvent>,
}

impl<S: DataSource, R: Renderer> TableController<S, R> {
    /// Validate configuration, render the empty shell and build the
    /// controller. Call [`init`](Self::init) afterwards to issue the
    /// initial data load.
    pub fn new(
        columns: Vec<ColumnDescriptor>,
        source: S,
        mut renderer: R,
        options: TableOptions,
    ) -> Result<Self, ConfigError> {
        if options.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.id == column.id) {
                return Err(ConfigError::DuplicateColumn(column.id.clone()));
            }
        }

        let sort = options.resolve_initial_sort(&columns)?;
        renderer.render_shell(&columns, &sort);

        Ok(Self {
            columns,
            source,
            renderer,
            rows: Vec::new(),
            sort,
            window: PageWindow::first(options.page_size),
            sort_locally: options.sort_locally,
            loading: false,
            empty: false,
            generation: 0,
            events: Vec::new(),
        })
    }

    /// Issue the initial data load.
    ///
    /// Remote mode requests the first page under the initial sort. Local
    /// mode requests the full row set once and sorts it in memory.
    pub async fn init(&mut self) {
        let window = self.window;
        let query = if self.sort_locally {
            RowQuery {
                sort_column: self.sort.column_id.clone(),
                direction: self.sort.direction,
                range_start: 1,
                range_end: None,
            }
        } else {
            self.page_query(window)
        };
        self.load_replace(window, query).await;
    }

    /// Handle a click on a column header.
    ///
    /// Clicks on unknown or non-sortable columns are no-ops, as are clicks
    /// while a fetch is in flight. Clicking the active column toggles the
    /// direction; any other sortable column starts ascending.
    pub async fn handle_header_click(&mut self, column_id: &str) {
        if self.loading {
            debug!("header click on '{column_id}' dropped: fetch in flight");
            return;
        }
        let Some(index) = self.columns.iter().position(|c| c.id == column_id) else {
            return;
        };
        if !self.columns[index].sortable {
            return;
        }

        let direction = if self.sort.column_id == column_id {
            self.sort.direction.toggled()
        } else {
            SortDirection::Asc
        };
        self.sort = SortSpec::new(column_id, direction);
        self.renderer.set_sort_indicator(&self.sort);
        self.events.push(TableEvent::SortChanged {
            column_id: column_id.to_string(),
            direction,
        });

        if self.sort_locally {
            sort::sort_rows(&mut self.rows, &self.columns[index], direction);
            self.renderer.replace_rows(&self.columns, &self.rows);
        } else {
            let window = PageWindow::first(self.window.size);
            let query = self.page_query(window);
            self.load_replace(window, query).await;
        }
    }

    /// Handle the host's notification that the viewport approaches the end
    /// of rendered content.
    ///
    /// No-op while loading or in local mode. Otherwise fetches the next
    /// page under the current sort and appends it; prior rows and their
    /// positions are never altered. On failure the window keeps its
    /// last-known-good value so a later scroll retries the same page.
    pub async fn handle_scroll_near_bottom(&mut self) {
        if self.loading || self.sort_locally {
            return;
        }

        let window = self.window.next();
        let query = self.page_query(window);
        let Some(page) = self.fetch(&query).await else {
            return;
        };

        match page {
            Ok(page) => {
                self.window = window;
                if page.is_empty() {
                    debug!("page {}..{} is empty", window.start, window.end());
                    return;
                }
                if self.empty {
                    self.empty = false;
                    self.renderer.set_empty(false);
                }
                self.renderer.append_rows(&self.columns, &page);
                self.events.push(TableEvent::RowsAppended { count: page.len() });
                debug!(
                    "appended {} row(s), {} total",
                    page.len(),
                    self.rows.len() + page.len()
                );
                self.rows.extend(page);
            }
            Err(message) => self.events.push(TableEvent::LoadFailed { message }),
        }
    }

    /// Fetch and wholesale-replace the row set; commits `window` only on
    /// success so failures leave rows and window untouched.
    async fn load_replace(&mut self, window: PageWindow, query: RowQuery) {
        let Some(result) = self.fetch(&query).await else {
            return;
        };

        match result {
            Ok(mut page) => {
                if self.sort_locally {
                    if let Some(column) =
                        self.columns.iter().find(|c| c.id == self.sort.column_id)
                    {
                        sort::sort_rows(&mut page, column, self.sort.direction);
                    }
                }
                self.window = window;
                let empty = page.is_empty();
                if empty != self.empty {
                    self.empty = empty;
                    self.renderer.set_empty(empty);
                }
                self.rows = page;
                self.renderer.replace_rows(&self.columns, &self.rows);
            }
            Err(message) => self.events.push(TableEvent::LoadFailed { message }),
        }
    }

    /// Run one guarded fetch. Returns `None` when the response turned stale
    /// while in flight; errors are logged and handed back as messages for
    /// the reported-error channel.
    async fn fetch(&mut self, query: &RowQuery) -> Option<Result<Vec<Row>, String>> {
        self.loading = true;
        self.renderer.set_loading(true);
        self.generation += 1;
        let generation = self.generation;

        let result = self.source.fetch(query).await;

        self.loading = false;
        self.renderer.set_loading(false);
        if generation != self.generation {
            debug!("discarding stale response for generation {generation}");
            return None;
        }

        Some(result.map_err(|err| {
            warn!("fetch failed for '{}': {err}", query.sort_column);
            err.to_string()
        }))
    }

    fn page_query(&self, window: PageWindow) -> RowQuery {
        RowQuery {
            sort_column: self.sort.column_id.clone(),
            direction: self.sort.direction,
            range_start: window.start,
            range_end: Some(window.end()),
        }
    }

    /// Drain the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// Release held rows and pending work. Any in-flight response is
    /// invalidated and will be discarded on arrival.
    pub fn teardown(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.rows.clear();
        self.events.clear();
        debug!("table controller torn down");
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the explicit empty state is active (first page returned
    /// zero rows and nothing has been appended since).
    pub fn is_empty_state(&self) -> bool {
        self.empty
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<S: DataSource, R: Renderer> Widget for TableController<S, R> {
    fn teardown(&mut self) {
        TableController::teardown(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::SortType;
    use crate::source::SourceError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Serves scripted pages and records every query it sees.
    #[derive(Clone, Default)]
    struct ScriptedSource {
        pages: Arc<Mutex<VecDeque<Result<Vec<Row>, SourceError>>>>,
        queries: Arc<Mutex<Vec<RowQuery>>>,
    }

    impl ScriptedSource {
        fn push_page(&self, rows: Vec<Row>) {
            self.pages.lock().unwrap().push_back(Ok(rows));
        }

        fn fetch_count(&self) -> usize {
            self.queries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl DataSource for ScriptedSource {
        async fn fetch(&self, query: &RowQuery) -> Result<Vec<Row>, SourceError> {
            self.queries.lock().unwrap().push(query.clone());
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn render_shell(&mut self, _columns: &[ColumnDescriptor], _sort: &SortSpec) {}
        fn replace_rows(&mut self, _columns: &[ColumnDescriptor], _rows: &[Row]) {}
        fn append_rows(&mut self, _columns: &[ColumnDescriptor], _rows: &[Row]) {}
        fn set_sort_indicator(&mut self, _sort: &SortSpec) {}
        fn set_empty(&mut self, _empty: bool) {}
        fn set_loading(&mut self, _loading: bool) {}
    }

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("title", "Title").sortable(SortType::Text),
            ColumnDescriptor::new("price", "Price").sortable(SortType::Number),
        ]
    }

    fn controller(
        source: ScriptedSource,
    ) -> TableController<ScriptedSource, NullRenderer> {
        TableController::new(columns(), source, NullRenderer, TableOptions::default())
            .unwrap()
    }

    #[tokio::test]
    async fn header_click_while_loading_is_dropped() {
        let source = ScriptedSource::default();
        source.push_page(vec![Row::new().with("title", "a")]);
        let mut controller = controller(source.clone());
        controller.init().await;
        assert_eq!(source.fetch_count(), 1);

        controller.loading = true;
        controller.handle_header_click("price").await;

        assert_eq!(source.fetch_count(), 1);
        assert_eq!(controller.sort().column_id, "title");
        assert!(controller.take_events().is_empty());
    }

    #[tokio::test]
    async fn scroll_while_loading_is_dropped() {
        let source = ScriptedSource::default();
        source.push_page(vec![Row::new().with("title", "a")]);
        let mut controller = controller(source.clone());
        controller.init().await;

        let window = controller.window();
        controller.loading = true;
        controller.handle_scroll_near_bottom().await;

        assert_eq!(source.fetch_count(), 1);
        assert_eq!(controller.window(), window);
        assert_eq!(controller.rows().len(), 1);
    }

    #[tokio::test]
    async fn teardown_invalidates_pending_responses() {
        let source = ScriptedSource::default();
        source.push_page(vec![Row::new().with("title", "a")]);
        let mut controller = controller(source.clone());
        controller.init().await;

        let generation = controller.generation;
        controller.teardown();

        assert!(controller.generation > generation);
        assert!(controller.rows().is_empty());
        assert!(!controller.is_loading());
    }
}
