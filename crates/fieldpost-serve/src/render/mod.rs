//! HTML and script rendering.
//!
//! Pages are maud functions composed from a shared [`page_shell`]; the
//! embed script is plain string templating over JSON-encoded data.

pub mod pages;
pub mod script;

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS shared by all pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#0b7a4b;--border:rgba(11,122,75,.18);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:640px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
h1{font-size:1.6rem;letter-spacing:-.02em;margin-bottom:1rem}
p{margin-bottom:.75rem;color:var(--fg2)}
form{display:flex;flex-direction:column;gap:.75rem;margin-top:1rem}
label{font-size:.85rem;font-weight:600;color:var(--fg2)}
input,textarea{font:inherit;padding:.55rem .7rem;border:1px solid var(--border);border-radius:6px;background:#fff;color:var(--fg)}
textarea{min-height:10rem;font-family:var(--mono);font-size:.9rem}
button{font:inherit;font-weight:600;padding:.55rem 1.1rem;border:none;border-radius:6px;background:var(--accent);color:#fff;cursor:pointer;align-self:flex-start}
button:hover{filter:brightness(1.08)}
code{font-family:var(--mono);font-size:.85rem}
pre{padding:.75rem 1rem;border:1px solid var(--border);border-radius:8px;background:#fff;overflow-x:auto;margin:.75rem 0}
.footer{margin-top:2.5rem;font-size:.8rem;color:var(--fg3)}
"#;

/// Wrap page content in the shared document shell.
pub fn page_shell(site_name: &str, title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — " (site_name) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (content) }
                footer class="footer" {
                    (site_name) " — password-protected blogs you can embed anywhere"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_includes_title_and_content() {
        let markup = page_shell("Fieldpost", "Welcome", html! { p { "body text" } });
        let out = markup.into_string();
        assert!(out.contains("<title>Welcome — Fieldpost</title>"));
        assert!(out.contains("body text"));
        assert!(out.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn shell_escapes_dynamic_text() {
        let markup = page_shell("<evil>", "t", html! {});
        assert!(!markup.into_string().contains("<evil>"));
    }
}
