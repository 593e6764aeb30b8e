//! Utility modules for the Tabulist application.
//!
//! This module contains common helpers used throughout the application.
//!
//! # Available Utilities
//!
//! - [`text`] - Cell text sanitizing and truncation for terminal display

pub mod text;
