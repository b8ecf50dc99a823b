//! The dashboard page.

use axum::extract::State;
use axum::response::Html;

use crate::layout::render_page;
use crate::AppState;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.layout()))
}
