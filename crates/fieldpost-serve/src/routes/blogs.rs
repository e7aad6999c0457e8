//! Blog creation, preview, and posting handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::Response;
use maud::Markup;
use serde::Deserialize;

use fieldpost_core::{Blog, markdown, password};

use crate::error::AppError;
use crate::render::pages;
use crate::routes::redirect_found;
use crate::state::AppState;

/// Form body for `POST /blogs`.
#[derive(Debug, Deserialize)]
pub struct NewBlogForm {
    #[serde(default)]
    pub password: String,
}

/// Form body for `POST /blogs/{id}/add`.
#[derive(Debug, Deserialize)]
pub struct AddPostForm {
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub body: String,
}

/// Parse a path id and load the matching blog, or fail with 404.
///
/// Malformed ids and missing rows both answer "Blog not found"; the
/// distinction is not surfaced to clients.
pub(crate) fn blog_or_404(state: &AppState, id: &str) -> Result<Blog, AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::BlogNotFound)?;
    state.store.find_blog(id)?.ok_or(AppError::BlogNotFound)
}

// ═══════════════════════════════════════════════════════════════════════════
// Handlers
// ═══════════════════════════════════════════════════════════════════════════

/// Render the blog-creation page.
pub async fn new_blog_page(State(state): State<AppState>) -> Markup {
    pages::new_blog(&state.config.site_name)
}

/// Create a blog from the submitted password and redirect to its preview.
///
/// Hashing blocks the handling task for a second or two at the configured
/// work factor; that is the cost of the slow hash, paid once per blog.
pub async fn create_blog(
    State(state): State<AppState>,
    Form(form): Form<NewBlogForm>,
) -> Result<Response, AppError> {
    let hash = password::hash(&form.password)?;
    let blog = state.store.create_blog(&hash)?;

    tracing::info!(blog_id = blog.id, "blog created");

    Ok(redirect_found(&format!("/blogs/{}", blog.id)))
}

/// Render the preview page for a blog.
pub async fn preview_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let blog = blog_or_404(&state, &id)?;
    let posts = state.store.list_posts(blog.id)?;
    let canonical_url = format!("{}/blogs/{}", state.config.base_url, blog.id);

    Ok(pages::preview(
        &state.config.site_name,
        blog.id,
        &canonical_url,
        &posts,
    ))
}

/// Render the add-post form for a blog.
pub async fn add_post_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Markup, AppError> {
    let blog = blog_or_404(&state, &id)?;
    Ok(pages::add_post(&state.config.site_name, blog.id))
}

/// Verify the password, render the markdown body, store the post, and
/// redirect back to the blog's preview.
pub async fn add_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<AddPostForm>,
) -> Result<Response, AppError> {
    let blog = blog_or_404(&state, &id)?;

    if !password::verify(&blog.password_hash, &form.password) {
        tracing::debug!(blog_id = blog.id, "post rejected, password mismatch");
        return Err(AppError::AccessDenied);
    }

    let body = markdown::render_markdown(&form.body);
    let post = state.store.create_post(blog.id, &body)?;

    tracing::info!(blog_id = blog.id, post_id = post.id, "post created");

    Ok(redirect_found(&format!("/blogs/{}", blog.id)))
}
