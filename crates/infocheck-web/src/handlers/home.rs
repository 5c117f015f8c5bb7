//! Home page — static hero, mentor and team sections.

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::state::SharedState;

pub async fn home_page(State(state): State<SharedState>) -> Html<String> {
    state.templates.render_page("home.html", context! {})
}
