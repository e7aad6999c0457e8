//! Index page handler.

use axum::extract::State;
use maud::Markup;

use crate::render::pages;
use crate::state::AppState;

/// Render the landing page.
pub async fn index(State(state): State<AppState>) -> Markup {
    pages::index(&state.config.site_name)
}
