//! Route definitions for the blog service.
//!
//! ## Routes
//!
//! - `GET /` - Index page
//! - `GET /health` - Health check (JSON)
//! - `GET /blogs` - Blog-creation page
//! - `POST /blogs` - Create a blog, redirect to its preview
//! - `GET /blogs/{id}` - Preview page with embed snippet
//! - `GET /blogs/{id}/add` - Add-post form
//! - `POST /blogs/{id}/add` - Verify password, store post, redirect
//! - `GET /blogs/{id}/js/{selector}` - Embed script
//! - `GET /static/*` - Static assets

pub mod blogs;
pub mod embed;
mod health;
mod home;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the complete service router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health_check))
        .route("/blogs", get(blogs::new_blog_page).post(blogs::create_blog))
        .route("/blogs/{id}", get(blogs::preview_page))
        .route(
            "/blogs/{id}/add",
            get(blogs::add_post_page).post(blogs::add_post),
        )
        .route("/blogs/{id}/js/{selector}", get(embed::embed_script))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// A 302 Found redirect.
///
/// axum's `Redirect` helpers emit 303/307/308; the create and add flows
/// answer with a plain 302.
pub(crate) fn redirect_found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
