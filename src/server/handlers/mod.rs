//! HTTP request handlers for the web server.

mod analyze;
mod api;
mod pages;
mod static_files;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

// Re-export handlers for use by the router
pub use analyze::analyze_dataset;
pub use api::{api_summary, health};
pub use pages::{about, contact, index};
pub use static_files::{serve_css, serve_js};

/// JSON error body: `{"error": message}`.
fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
