//! Static asset constants.

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("style.css");
