//! Constants used throughout the application
//!
//! This module centralizes magic values, UI text, and default settings
//! to improve maintainability and consistency.

/// Default backend base URL for the bundled product table
pub const DEFAULT_BACKEND_URL: &str = "https://course-js.javascript.ru";
/// Default endpoint serving sorted, paginated product rows
pub const DEFAULT_ENDPOINT: &str = "api/rest/products";

// Pagination
/// Default number of rows requested per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;
/// Upper bound on the configurable page size
pub const MAX_PAGE_SIZE: u64 = 500;

// UI Layout Constants
/// Minimum scroll threshold in rows
pub const SCROLL_THRESHOLD_MIN: u16 = 1;
/// Maximum scroll threshold in rows
pub const SCROLL_THRESHOLD_MAX: u16 = 50;
/// Default distance from the bottom row that triggers the next page load
pub const SCROLL_THRESHOLD_DEFAULT: u16 = 3;

/// Cap on rendered cell text, in characters; longer cells are truncated
/// with an ellipsis before layout
pub const MAX_CELL_CHARS: usize = 120;

// UI Text
/// Placeholder shown instead of the table body when the first page is empty
pub const EMPTY_PLACEHOLDER: &str = "No rows to display";
/// Suffix appended to the table title while a fetch is in flight
pub const LOADING_SUFFIX: &str = " - loading...";
/// Sort indicator for ascending order
pub const SORT_ARROW_ASC: &str = " ▲";
/// Sort indicator for descending order
pub const SORT_ARROW_DESC: &str = " ▼";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

/// Default log file path used when logging is enabled without a file set
pub const DEFAULT_LOG_FILE: &str = "tabulist.log";
