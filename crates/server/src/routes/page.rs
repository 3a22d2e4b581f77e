use axum::response::Html;

/// Static landing page, embedded at compile time
pub const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the index page at `GET /`, byte-for-byte.
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
