//! HTML page handlers.

use axum::response::Html;

use super::super::templates;

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

pub async fn about() -> Html<String> {
    Html(templates::about_page())
}

pub async fn contact() -> Html<String> {
    Html(templates::contact_page())
}
