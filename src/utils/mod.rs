//! Shared utility functions.
//!
//! - `format`: Italian-style number formatting for rendered pages and CLI output

mod format;

pub use format::{format_kg, format_percentage, format_thousands};
