//! HTML rendering for all pages.
//!
//! Each view is a function producing a complete page with [maud]. Dynamic
//! values are escaped automatically; the single exception is stored post
//! content, which is trusted-author HTML injected verbatim.
//!
//! [maud]: https://maud.lambda.xyz/

pub mod admin;
pub mod home;
pub mod not_found;
pub mod post;

use maud::{html, Markup, DOCTYPE};

pub use admin::admin_page;
pub use home::home_page;
pub use not_found::not_found_page;
pub use post::post_page;

/// Shared page shell: doctype, head, header, footer.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (maud::PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="site-header" {
                    a class="site-title" href="/" { "minipress" }
                }
                main class="content" {
                    (body)
                }
                footer class="site-footer" {
                    "Powered by minipress"
                }
            }
        }
    }
}

/// Base CSS shared by every page.
pub const PAGE_CSS: &str = r#"
:root{--fg:#1a1a1a;--fg2:#555;--fg3:#888;--accent:#7c3aed;--border:#e2e2e2;--bg:#fff}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:system-ui,-apple-system,sans-serif;color:var(--fg);background:var(--bg);line-height:1.6}
a{color:var(--accent)}
.site-header{padding:1rem 1.5rem;border-bottom:1px solid var(--border)}
.site-title{font-weight:700;font-size:1.1rem;color:var(--fg);text-decoration:none}
.content{max-width:680px;margin:0 auto;padding:2rem 1.5rem}
.site-footer{padding:2rem 1.5rem;text-align:center;color:var(--fg3);font-size:.85rem}
.post-list{list-style:none;display:flex;flex-direction:column;gap:1.5rem}
.post-card h2{font-size:1.3rem}
.post-card h2 a{color:var(--fg);text-decoration:none}
.post-card h2 a:hover{color:var(--accent)}
.post-meta{font-size:.85rem;color:var(--fg3)}
.post-category{display:inline-block;font-size:.75rem;font-weight:600;color:var(--accent);text-transform:uppercase;letter-spacing:.05em}
.post-title{font-size:2rem;line-height:1.25;margin-bottom:.5rem}
.post-body{margin-top:1.5rem}
.post-body p{margin:1rem 0}
.empty{color:var(--fg3)}
.error-page{text-align:center;padding:3rem 0}
.error-page h1{font-size:2.5rem;margin-bottom:.5rem}
.admin-form{display:flex;flex-direction:column;gap:.75rem;max-width:420px}
.admin-form label{font-size:.85rem;font-weight:600;color:var(--fg2)}
.admin-form input,.admin-form textarea{padding:.5rem;border:1px solid var(--border);border-radius:4px;font:inherit}
.admin-form textarea{min-height:220px;font-family:monospace}
.admin-form button{padding:.5rem 1rem;border:0;border-radius:4px;background:var(--accent);color:#fff;font-weight:600;cursor:pointer;align-self:flex-start}
.admin-bar{display:flex;justify-content:space-between;align-items:baseline;margin-bottom:1.5rem}
.admin-bar a{font-size:.85rem}
"#;
