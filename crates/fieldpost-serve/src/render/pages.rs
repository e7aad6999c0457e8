//! Full pages for the blog-creation and posting flows.

use fieldpost_core::Post;
use maud::{Markup, PreEscaped, html};

use super::page_shell;

/// Landing page explaining the service.
pub fn index(site_name: &str) -> Markup {
    page_shell(
        site_name,
        "Welcome",
        html! {
            h1 { (site_name) }
            p {
                "Create a password-protected blog, write posts in markdown, "
                "and embed them on any page with one script tag."
            }
            p {
                a href="/blogs" { "Create a blog" }
            }
        },
    )
}

/// Blog-creation page: a single password form.
pub fn new_blog(site_name: &str) -> Markup {
    page_shell(
        site_name,
        "Create a blog",
        html! {
            h1 { "Create a blog" }
            p {
                "Pick a password. Anyone who knows it can post to the blog; "
                "there is no way to change it later."
            }
            form method="post" action="/blogs" {
                label for="password" { "Password" }
                input type="password" id="password" name="password" required;
                button type="submit" { "Create" }
            }
        },
    )
}

/// Preview page for a blog: canonical URL, embed snippet, and the posts
/// as they will appear when embedded.
pub fn preview(site_name: &str, blog_id: i64, canonical_url: &str, posts: &[Post]) -> Markup {
    let embed_src = format!("{canonical_url}/js/%23fieldpost");
    let snippet =
        format!("<div id=\"fieldpost\"></div>\n<script src=\"{embed_src}\"></script>");

    page_shell(
        site_name,
        &format!("Blog {blog_id}"),
        html! {
            h1 { "Blog " (blog_id) }
            p {
                "This blog lives at "
                a href=(canonical_url) { (canonical_url) }
            }
            p {
                "Embed its posts on any page — the selector at the end of "
                "the script URL picks the target element:"
            }
            pre { code { (snippet) } }
            p {
                a href=(format!("/blogs/{blog_id}/add")) { "Write a post" }
            }
            @if posts.is_empty() {
                p { "No posts yet." }
            } @else {
                @for post in posts {
                    article { (post_body(&post.body)) }
                }
            }
        },
    )
}

/// Add-post page: password plus markdown body.
pub fn add_post(site_name: &str, blog_id: i64) -> Markup {
    page_shell(
        site_name,
        &format!("New post — blog {blog_id}"),
        html! {
            h1 { "New post" }
            p {
                "Posting to "
                a href=(format!("/blogs/{blog_id}")) { "blog " (blog_id) }
                ". The body is markdown; it is rendered once when you submit."
            }
            form method="post" action=(format!("/blogs/{blog_id}/add")) {
                label for="password" { "Blog password" }
                input type="password" id="password" name="password" required;
                label for="body" { "Body (markdown)" }
                textarea id="body" name="body" placeholder="# A headline" {}
                button type="submit" { "Publish" }
            }
        },
    )
}

/// Render an already-sanitized post body fragment.
///
/// Bodies are cleaned at write time, so this is the one place stored HTML
/// is deliberately passed through unescaped.
fn post_body(body: &str) -> Markup {
    html! { (PreEscaped(body)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(body: &str) -> Post {
        Post {
            id: 1,
            blog_id: 1,
            created_at: 0,
            updated_at: 0,
            body: body.to_string(),
        }
    }

    #[test]
    fn index_links_to_creation() {
        let out = index("Fieldpost").into_string();
        assert!(out.contains("href=\"/blogs\""));
    }

    #[test]
    fn new_blog_posts_password_form() {
        let out = new_blog("Fieldpost").into_string();
        assert!(out.contains("action=\"/blogs\""));
        assert!(out.contains("name=\"password\""));
    }

    #[test]
    fn preview_shows_canonical_url_and_snippet() {
        let out = preview("Fieldpost", 7, "https://example.com/blogs/7", &[]).into_string();
        assert!(out.contains("https://example.com/blogs/7"));
        assert!(out.contains("/js/%23fieldpost"));
        assert!(out.contains("href=\"/blogs/7/add\""));
        assert!(out.contains("No posts yet."));
    }

    #[test]
    fn preview_renders_post_bodies_unescaped() {
        let posts = [post("<h1>Hi</h1>")];
        let out = preview("Fieldpost", 7, "https://example.com/blogs/7", &posts).into_string();
        assert!(out.contains("<article><h1>Hi</h1></article>"));
    }

    #[test]
    fn add_post_form_targets_blog() {
        let out = add_post("Fieldpost", 3).into_string();
        assert!(out.contains("action=\"/blogs/3/add\""));
        assert!(out.contains("name=\"password\""));
        assert!(out.contains("name=\"body\""));
    }
}
