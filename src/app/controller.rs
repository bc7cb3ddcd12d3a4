use axum::response::Html;

use super::templates::index_template::index_template;

pub async fn get_root() -> Html<&'static str> {
    Html(index_template())
}
