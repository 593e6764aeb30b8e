//! Tabulist - A sortable data table for the terminal
//!
//! This library provides a sortable, remotely paginated data table built
//! around a single [`table::TableController`]. The controller owns all table
//! state (rows, sort order, page window, loading flag) and composes with two
//! collaborators: a [`render::Renderer`] it drives, and a
//! [`source::DataSource`] it fetches page-sized row slices from. A Ratatui
//! front end ships in [`ui`].
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`column`] - Column descriptors, sort specifications and cell values
//! * [`table`] - The table controller state machine and sort comparators
//! * [`source`] - Data source abstraction (HTTP JSON endpoint, in-memory)
//! * [`render`] - Renderer contract driven by the controller
//! * [`registry`] - Host-level registry of live widget instances
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface
//! * [`utils`] - Utility functions and helpers

/// Column descriptors, sort specifications, cell values and rows
pub mod column;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Host-level widget registry with explicit teardown
pub mod registry;

/// Renderer contract the table controller drives
pub mod render;

/// Data source abstraction layer
pub mod source;

/// Table controller state machine and sorting
pub mod table;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for cell text handling and other helpers
pub mod utils;

// Re-export the core types for convenient access
pub use column::{CellValue, ColumnDescriptor, Row, SortDirection, SortSpec, SortType};
pub use table::{ConfigError, TableController, TableEvent, TableOptions};
