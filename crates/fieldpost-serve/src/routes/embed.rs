//! Embed script endpoint.
//!
//! `GET /blogs/{id}/js/{selector}` answers with a JavaScript program that
//! a third-party page includes to render the blog's posts client-side.
//! The selector arrives percent-encoded in the path (`%23posts` for
//! `#posts`); axum decodes it before it reaches the handler.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::render::script::render_script;
use crate::routes::blogs::blog_or_404;
use crate::state::AppState;

/// Render the embed script for a blog, newest posts first.
pub async fn embed_script(
    State(state): State<AppState>,
    Path((id, selector)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let blog = blog_or_404(&state, &id)?;
    let posts = state.store.list_posts(blog.id)?;

    let script = render_script(&selector, &posts);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/javascript; charset=utf-8"),
    );

    Ok((StatusCode::OK, headers, script).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    use fieldpost_core::{Store, password};

    use crate::config::Config;

    fn test_state() -> AppState {
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            database_path: ":memory:".to_string(),
            base_url: "https://blogs.test".to_string(),
            site_name: "Fieldpost".to_string(),
            static_dir: "static".to_string(),
        };
        AppState::with_store(config, Store::open_in_memory().unwrap())
    }

    #[tokio::test]
    async fn script_embeds_selector_and_posts() {
        let state = test_state();
        let hash = password::hash_with_cost("pw", 4).unwrap();
        let blog = state.store.create_blog(&hash).unwrap();
        state.store.create_post(blog.id, "<h1>Hi</h1>").unwrap();

        let response = embed_script(
            State(state),
            Path((blog.id.to_string(), "#posts".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/javascript; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn missing_blog_produces_no_script() {
        let state = test_state();
        let err = embed_script(
            State(state),
            Path(("424242".to_string(), "#posts".to_string())),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BlogNotFound));
    }

    #[tokio::test]
    async fn non_numeric_blog_id_is_not_found() {
        let state = test_state();
        let err = embed_script(State(state), Path(("abc".to_string(), "x".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BlogNotFound));
    }
}
