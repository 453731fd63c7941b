use axum::response::Html;

/// Landing page; not part of the documented API.
pub async fn root() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}
