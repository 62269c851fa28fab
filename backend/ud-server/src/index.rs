use axum::response::Html;

const INDEX_HTML: &str = include_str!("../templates/index.html");

/// GET / - static page; its script talks to the JSON API
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
