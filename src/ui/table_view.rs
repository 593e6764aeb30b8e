//! Ratatui table renderer.
//!
//! [`TableView`] is the terminal implementation of the [`Renderer`]
//! contract. It keeps a formatted copy of the body cells plus the header
//! titles, sort indicator, loading and empty flags, and draws them as a
//! stateful Ratatui table each frame.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row as TableRow, Table, TableState},
    Frame,
};

use crate::column::{ColumnDescriptor, Row, SortDirection, SortSpec};
use crate::constants::{
    EMPTY_PLACEHOLDER, LOADING_SUFFIX, MAX_CELL_CHARS, SORT_ARROW_ASC, SORT_ARROW_DESC,
};
use crate::render::Renderer;
use crate::utils::text;

pub struct TableView {
    column_ids: Vec<String>,
    titles: Vec<String>,
    display_rows: Vec<Vec<String>>,
    sort: Option<SortSpec>,
    empty: bool,
    loading: bool,
    state: TableState,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView {
    pub fn new() -> Self {
        Self {
            column_ids: Vec::new(),
            titles: Vec::new(),
            display_rows: Vec::new(),
            sort: None,
            empty: false,
            loading: false,
            state: TableState::default(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.display_rows.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Column id at the given header position, for digit-key sorting.
    pub fn column_id_at(&self, index: usize) -> Option<&str> {
        self.column_ids.get(index).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.display_rows.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) => (i + 1).min(self.display_rows.len() - 1),
            None => 0,
        };
        self.state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.display_rows.is_empty() {
            return;
        }
        let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(previous));
    }

    pub fn select_first(&mut self) {
        if !self.display_rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.display_rows.is_empty() {
            self.state.select(Some(self.display_rows.len() - 1));
        }
    }

    /// Whether the selection sits within `threshold` rows of the end of
    /// rendered content. Hosts use this to decide when to request the next
    /// page.
    pub fn near_bottom(&self, threshold: u16) -> bool {
        match self.state.selected() {
            Some(selected) => {
                selected + (threshold as usize) >= self.display_rows.len().saturating_sub(1)
            }
            None => false,
        }
    }

    fn format_rows(columns: &[ColumnDescriptor], rows: &[Row]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| text::truncate(&text::sanitize(&column.format_cell(row)), MAX_CELL_CHARS))
                    .collect()
            })
            .collect()
    }

    fn clamp_selection(&mut self) {
        if self.display_rows.is_empty() {
            self.state.select(None);
        } else if let Some(selected) = self.state.selected() {
            if selected >= self.display_rows.len() {
                self.state.select(Some(self.display_rows.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }
    }

    fn header_cells(&self) -> Vec<Cell<'static>> {
        self.column_ids
            .iter()
            .zip(&self.titles)
            .map(|(id, title)| {
                let arrow = match &self.sort {
                    Some(sort) if &sort.column_id == id => match sort.direction {
                        SortDirection::Asc => SORT_ARROW_ASC,
                        SortDirection::Desc => SORT_ARROW_DESC,
                    },
                    _ => "",
                };
                Cell::from(format!("{title}{arrow}"))
            })
            .collect()
    }

    /// Draw the table into `area`.
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let title = if self.loading {
            format!("Tabulist{LOADING_SUFFIX}")
        } else {
            "Tabulist".to_string()
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        if self.empty {
            let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let header = TableRow::new(self.header_cells())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .height(1);
        let body = self
            .display_rows
            .iter()
            .map(|cells| TableRow::new(cells.iter().map(|c| Cell::from(c.as_str()))));
        let widths = vec![Constraint::Fill(1); self.titles.len().max(1)];

        let table = Table::new(body, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        f.render_stateful_widget(table, area, &mut self.state);
    }
}

impl Renderer for TableView {
    fn render_shell(&mut self, columns: &[ColumnDescriptor], sort: &SortSpec) {
        self.column_ids = columns.iter().map(|c| c.id.clone()).collect();
        self.titles = columns.iter().map(|c| c.title.clone()).collect();
        self.display_rows.clear();
        self.sort = Some(sort.clone());
        self.state = TableState::default();
    }

    fn replace_rows(&mut self, columns: &[ColumnDescriptor], rows: &[Row]) {
        self.display_rows = Self::format_rows(columns, rows);
        self.clamp_selection();
    }

    fn append_rows(&mut self, columns: &[ColumnDescriptor], rows: &[Row]) {
        self.display_rows.extend(Self::format_rows(columns, rows));
        self.clamp_selection();
    }

    fn set_sort_indicator(&mut self, sort: &SortSpec) {
        self.sort = Some(sort.clone());
    }

    fn set_empty(&mut self, empty: bool) {
        self.empty = empty;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
