//! Embed script rendering.
//!
//! The `/blogs/{id}/js/{selector}` endpoint answers with a JavaScript
//! program that renders a blog's posts into an element on a third-party
//! page. Data reaches the script by explicit serialize-then-inject: the
//! selector and post list are JSON-encoded with serde and substituted
//! into a fixed template. No template engine runs over user data.

use serde::Serialize;

use fieldpost_core::Post;

/// The embed program. `{{selector}}` and `{{posts}}` are replaced with
/// JSON-encoded values before the response is written.
const SCRIPT_TEMPLATE: &str = r#"(function () {
  "use strict";
  var selector = {{selector}};
  var posts = {{posts}};
  var target = document.querySelector(selector);
  if (!target) {
    return;
  }
  posts.forEach(function (post) {
    var article = document.createElement("article");
    article.className = "fieldpost-post";
    article.innerHTML = post.body;
    target.appendChild(article);
  });
})();
"#;

/// Render the embed script for a selector and post list.
pub fn render_script(selector: &str, posts: &[Post]) -> String {
    SCRIPT_TEMPLATE
        .replace("{{selector}}", &json_token(&selector))
        .replace("{{posts}}", &json_token(&posts))
}

/// JSON-encode a value for injection into the script.
///
/// Encoding failures degrade to the literal token `"ERROR"` rather than
/// failing the whole response.
fn json_token<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"ERROR\"".to_string())
}
