//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the web interface.
pub const CSS: &str = include_str!("styles.css");

/// Upload form and results table behaviour.
pub const JS: &str = include_str!("app.js");
