//! Terminal user interface.
//!
//! Wires a [`TableController`] to the terminal: key and mouse events map to
//! header clicks and scroll-near-bottom notifications, controller events
//! drain into the status bar.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use tokio::time::Duration;

use crate::column::ColumnDescriptor;
use crate::config::Config;
use crate::source::DataSource;
use crate::table::{TableController, TableEvent};

pub mod table_view;

pub use table_view::TableView;

/// Application state
pub struct App<S: DataSource> {
    controller: TableController<S, TableView>,
    scroll_threshold: u16,
    status: Option<String>,
    should_quit: bool,
}

impl<S: DataSource> App<S> {
    pub fn new(controller: TableController<S, TableView>, scroll_threshold: u16) -> Self {
        Self {
            controller,
            scroll_threshold,
            status: None,
            should_quit: false,
        }
    }

    async fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.controller.renderer_mut().select_next();
                self.maybe_paginate().await;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.controller.renderer_mut().select_previous();
            }
            KeyCode::Char('g') => self.controller.renderer_mut().select_first(),
            KeyCode::Char('G') => {
                self.controller.renderer_mut().select_last();
                self.maybe_paginate().await;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let column_id = self
                    .controller
                    .renderer()
                    .column_id_at(index)
                    .map(str::to_string);
                if let Some(column_id) = column_id {
                    self.controller.handle_header_click(&column_id).await;
                }
            }
            _ => {}
        }
    }

    /// Forward a scroll-near-bottom notification when the selection sits
    /// close enough to the end of rendered content.
    async fn maybe_paginate(&mut self) {
        if self.controller.renderer().near_bottom(self.scroll_threshold) {
            self.controller.handle_scroll_near_bottom().await;
        }
    }

    fn drain_events(&mut self) {
        for event in self.controller.take_events() {
            self.status = Some(match event {
                TableEvent::SortChanged {
                    column_id,
                    direction,
                } => format!("Sorted by {} ({})", column_id, direction.as_str()),
                TableEvent::RowsAppended { count } => format!("Loaded {count} more row(s)"),
                TableEvent::LoadFailed { message } => format!("Load failed: {message}"),
            });
        }
    }
}

/// Set up the terminal, run the event loop, and restore the terminal.
pub async fn run_app<S: DataSource>(
    config: &Config,
    columns: Vec<ColumnDescriptor>,
    source: S,
) -> Result<()> {
    let mut controller =
        TableController::new(columns, source, TableView::new(), config.table_options())?;
    controller.init().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller, config.ui.scroll_threshold);
    let res = run_ui(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

async fn run_ui<B: Backend, S: DataSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        app.drain_events();
        terminal.draw(|f| draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key).await,
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => {
                        app.controller.renderer_mut().select_next();
                        app.maybe_paginate().await;
                    }
                    MouseEventKind::ScrollUp => {
                        app.controller.renderer_mut().select_previous();
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw<S: DataSource>(f: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    app.controller.renderer_mut().draw(f, chunks[0]);

    let status = match &app.status {
        Some(message) => format!(
            " {} | {} rows | j/k move, 1-9 sort, q quit",
            message,
            app.controller.rows().len()
        ),
        None => format!(
            " {} rows | j/k move, 1-9 sort, q quit",
            app.controller.rows().len()
        ),
    };
    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status_bar, chunks[1]);
}
